//! ptero: command-line administration for a game-server panel.

use clap::Parser;

use ptero_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ptero_core=warn,ptero_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = ptero_cli::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
