//! ptero CLI: command-line administration for a game-server panel.
//!
//! A thin layer over `ptero-core`: every subcommand maps onto one client
//! call and prints the panel's answer as JSON.

pub mod commands;
pub mod credentials;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ptero: manage panel users, servers and databases
#[derive(Parser, Debug)]
#[command(name = "ptero", version, about = "ptero: manage panel users, servers and databases")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the panel is and how to authenticate. Flags and environment take
/// precedence over saved credentials.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Panel URL, e.g. https://panel.example.com
    #[arg(long, env = "PTERO_URL", global = true)]
    pub url: Option<String>,

    /// Application API key
    #[arg(long, env = "PTERO_API_KEY", global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PTERO_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Credential file written by `ptero login`
    #[arg(long, env = "PTERO_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify an API key and save it for later commands
    Login,

    /// Forget saved credentials
    Logout,

    /// Manage panel users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage game servers
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },

    /// Manage server databases
    Database {
        #[command(subcommand)]
        action: DatabaseAction,
    },

    /// Manage locations
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Manage nodes and their allocations
    Node {
        #[command(subcommand)]
        action: NodeAction,
    },

    /// Browse nests and eggs
    Nest {
        #[command(subcommand)]
        action: NestAction,
    },
}

/// Paging and filtering for list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,
    /// Items per page (1-100)
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Filter as field=value; repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,
    /// Sort column, prefix with '-' for descending
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List users
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a user by id, or by external id with --external
    Get {
        id: String,
        #[arg(long)]
        external: bool,
    },
    /// Create a user from a JSON or YAML file
    Create {
        #[arg(long)]
        file: String,
    },
    /// Replace a user's details from a JSON or YAML file
    Update {
        id: u64,
        #[arg(long)]
        file: String,
    },
    /// Delete a user
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServerAction {
    /// List servers
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a server by id, or by external id with --external
    Get {
        id: String,
        #[arg(long)]
        external: bool,
    },
    /// Create a server from a JSON or YAML file
    Create {
        #[arg(long)]
        file: String,
    },
    /// Update name, owner, description or external id
    Details {
        id: u64,
        #[arg(long)]
        file: String,
    },
    /// Update limits and allocations
    Build {
        id: u64,
        #[arg(long)]
        file: String,
    },
    /// Update startup command, image and environment
    Startup {
        id: u64,
        #[arg(long)]
        file: String,
    },
    /// Suspend a server
    Suspend { id: u64 },
    /// Lift a suspension
    Unsuspend { id: u64 },
    /// Re-run the install script
    Reinstall {
        id: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Delete a server
    Delete {
        id: u64,
        /// Remove the panel record even if the node is unreachable
        #[arg(long)]
        force: bool,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DatabaseAction {
    /// List a server's databases
    List {
        server: u64,
        #[arg(long)]
        show_passwords: bool,
    },
    /// Show one database
    Get {
        server: u64,
        id: u64,
        #[arg(long)]
        show_password: bool,
    },
    /// Create a database for a server
    Create {
        server: u64,
        /// Database name (letters, digits, '-' and '_')
        #[arg(long)]
        name: String,
        /// Host mask allowed to connect
        #[arg(long, default_value = "%")]
        remote: String,
        /// Database host id
        #[arg(long)]
        host: u64,
    },
    /// Rotate a database password
    ResetPassword { server: u64, id: u64 },
    /// Delete a database
    Delete {
        server: u64,
        id: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LocationAction {
    /// List locations
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a location
    Get { id: u64 },
    /// Create a location
    Create {
        #[arg(long)]
        short: String,
        #[arg(long)]
        long: Option<String>,
    },
    /// Rename a location
    Update {
        id: u64,
        #[arg(long)]
        short: Option<String>,
        #[arg(long)]
        long: Option<String>,
    },
    /// Delete a location
    Delete {
        id: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NodeAction {
    /// List nodes
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a node
    Get { id: u64 },
    /// Print the daemon configuration for a node
    Config { id: u64 },
    /// Create a node from a JSON or YAML file
    Create {
        #[arg(long)]
        file: String,
    },
    /// Update a node from a JSON or YAML file
    Update {
        id: u64,
        #[arg(long)]
        file: String,
    },
    /// Delete a node
    Delete {
        id: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List a node's allocations
    Allocations {
        id: u64,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Add allocations to a node
    AddAllocations {
        id: u64,
        #[arg(long)]
        ip: String,
        #[arg(long)]
        alias: Option<String>,
        /// Ports or ranges, comma-separated (e.g. 25565,25570-25580)
        #[arg(long, value_delimiter = ',', required = true)]
        ports: Vec<String>,
    },
    /// Remove one allocation from a node
    RemoveAllocation {
        id: u64,
        allocation: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NestAction {
    /// List nests
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a nest
    Get { id: u64 },
    /// List a nest's eggs
    Eggs { nest: u64 },
    /// Show one egg
    Egg { nest: u64, id: u64 },
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<(), String> {
    let Some(command) = cli.command else {
        // No subcommand: show help
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        return Ok(());
    };

    let conn = cli.connection;
    match command {
        Commands::Login => commands::login::login(&conn).await,
        Commands::Logout => commands::login::logout(&conn),

        Commands::User { action } => {
            let client = commands::connect(&conn)?;
            match action {
                UserAction::List { list } => commands::user::list(&client, &list).await,
                UserAction::Get { id, external } => commands::user::get(&client, &id, external).await,
                UserAction::Create { file } => commands::user::create(&client, &file).await,
                UserAction::Update { id, file } => commands::user::update(&client, id, &file).await,
                UserAction::Delete { id, yes } => commands::user::delete(&client, id, yes).await,
            }
        }

        Commands::Server { action } => {
            let client = commands::connect(&conn)?;
            match action {
                ServerAction::List { list } => commands::server::list(&client, &list).await,
                ServerAction::Get { id, external } => {
                    commands::server::get(&client, &id, external).await
                }
                ServerAction::Create { file } => commands::server::create(&client, &file).await,
                ServerAction::Details { id, file } => {
                    commands::server::details(&client, id, &file).await
                }
                ServerAction::Build { id, file } => commands::server::build(&client, id, &file).await,
                ServerAction::Startup { id, file } => {
                    commands::server::startup(&client, id, &file).await
                }
                ServerAction::Suspend { id } => commands::server::suspend(&client, id).await,
                ServerAction::Unsuspend { id } => commands::server::unsuspend(&client, id).await,
                ServerAction::Reinstall { id, yes } => {
                    commands::server::reinstall(&client, id, yes).await
                }
                ServerAction::Delete { id, force, yes } => {
                    commands::server::delete(&client, id, force, yes).await
                }
            }
        }

        Commands::Database { action } => {
            let client = commands::connect(&conn)?;
            match action {
                DatabaseAction::List {
                    server,
                    show_passwords,
                } => commands::database::list(&client, server, show_passwords).await,
                DatabaseAction::Get {
                    server,
                    id,
                    show_password,
                } => commands::database::get(&client, server, id, show_password).await,
                DatabaseAction::Create {
                    server,
                    name,
                    remote,
                    host,
                } => commands::database::create(&client, server, &name, &remote, host).await,
                DatabaseAction::ResetPassword { server, id } => {
                    commands::database::reset_password(&client, server, id).await
                }
                DatabaseAction::Delete { server, id, yes } => {
                    commands::database::delete(&client, server, id, yes).await
                }
            }
        }

        Commands::Location { action } => {
            let client = commands::connect(&conn)?;
            match action {
                LocationAction::List { list } => commands::location::list(&client, &list).await,
                LocationAction::Get { id } => commands::location::get(&client, id).await,
                LocationAction::Create { short, long } => {
                    commands::location::create(&client, &short, long).await
                }
                LocationAction::Update { id, short, long } => {
                    commands::location::update(&client, id, short, long).await
                }
                LocationAction::Delete { id, yes } => {
                    commands::location::delete(&client, id, yes).await
                }
            }
        }

        Commands::Node { action } => {
            let client = commands::connect(&conn)?;
            match action {
                NodeAction::List { list } => commands::node::list(&client, &list).await,
                NodeAction::Get { id } => commands::node::get(&client, id).await,
                NodeAction::Config { id } => commands::node::config(&client, id).await,
                NodeAction::Create { file } => commands::node::create(&client, &file).await,
                NodeAction::Update { id, file } => commands::node::update(&client, id, &file).await,
                NodeAction::Delete { id, yes } => commands::node::delete(&client, id, yes).await,
                NodeAction::Allocations { id, list } => {
                    commands::node::allocations(&client, id, &list).await
                }
                NodeAction::AddAllocations {
                    id,
                    ip,
                    alias,
                    ports,
                } => commands::node::add_allocations(&client, id, &ip, alias, ports).await,
                NodeAction::RemoveAllocation {
                    id,
                    allocation,
                    yes,
                } => commands::node::remove_allocation(&client, id, allocation, yes).await,
            }
        }

        Commands::Nest { action } => {
            let client = commands::connect(&conn)?;
            match action {
                NestAction::List { list } => commands::nest::list(&client, &list).await,
                NestAction::Get { id } => commands::nest::get(&client, id).await,
                NestAction::Eggs { nest } => commands::nest::eggs(&client, nest).await,
                NestAction::Egg { nest, id } => commands::nest::egg(&client, nest, id).await,
            }
        }
    }
}
