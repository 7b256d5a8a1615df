//! CLI command implementations.
//!
//! Each submodule corresponds to a top-level CLI command and calls the
//! matching `ptero-core` wrapper through a shared [`PanelClient`].

pub mod database;
pub mod location;
pub mod login;
pub mod nest;
pub mod node;
pub mod server;
pub mod user;

use std::io::{IsTerminal, Read};
use std::path::Path;
use std::time::Duration;

use ptero_core::{ClientConfig, ListQuery, PanelClient, PanelError};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::{CredentialStore, Credentials};
use crate::{ConnectionArgs, ListArgs};

pub fn credential_store(conn: &ConnectionArgs) -> CredentialStore {
    CredentialStore::new(
        conn.credentials
            .clone()
            .unwrap_or_else(CredentialStore::default_path),
    )
}

/// Merge flags/env with saved credentials. Flags win field by field.
pub fn resolve_config(conn: &ConnectionArgs, saved: Option<Credentials>) -> Result<ClientConfig, String> {
    let url = conn
        .url
        .clone()
        .or_else(|| saved.as_ref().map(|c| c.url.clone()));
    let key = conn
        .key
        .clone()
        .or_else(|| saved.as_ref().map(|c| c.api_key.clone()));
    let timeout = conn
        .timeout
        .or_else(|| saved.as_ref().and_then(|c| c.timeout_secs));

    let (Some(url), Some(key)) = (url, key) else {
        return Err(
            "No panel credentials. Run `ptero login --url <panel> --key <key>` or set PTERO_URL and PTERO_API_KEY"
                .to_string(),
        );
    };

    let mut config = ClientConfig::new(url, key);
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Read the credential file. When flags already name the panel and key,
/// an unreadable file only loses the saved timeout.
pub fn saved_credentials(conn: &ConnectionArgs) -> Result<Option<Credentials>, String> {
    match credential_store(conn).load() {
        Ok(saved) => Ok(saved),
        Err(e) if conn.url.is_some() && conn.key.is_some() => {
            tracing::warn!(error = %e, "Ignoring unreadable credential file");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Build a client from flags, environment and the credential file.
pub fn connect(conn: &ConnectionArgs) -> Result<PanelClient, String> {
    let saved = saved_credentials(conn)?;
    let config = resolve_config(conn, saved)?;
    PanelClient::new(config).map_err(describe)
}

/// Render a panel error for the terminal, including per-field details.
pub fn describe(err: PanelError) -> String {
    match &err {
        PanelError::Validation { details, .. } if details.iter().any(|d| d.source_field().is_some()) => {
            let fields = details
                .iter()
                .map(|d| match d.source_field() {
                    Some(field) => format!("  {}: {}", field, d.detail),
                    None => format!("  {}", d.detail),
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("Panel rejected the request:\n{}", fields)
        }
        _ => err.to_string(),
    }
}

pub fn list_query(args: &ListArgs) -> Result<ListQuery, String> {
    let mut query = ListQuery::new();
    query.page = args.page;
    query.per_page = args.per_page;
    query.sort = args.sort.clone();
    for filter in &args.filters {
        let (field, value) = filter
            .split_once('=')
            .ok_or_else(|| format!("Invalid filter '{}', expected field=value", filter))?;
        query = query.filter(field.trim(), value.trim());
    }
    Ok(query)
}

/// Read a request body from a file; `.json` is parsed as JSON, anything
/// else (and `-` for stdin) as YAML, which also accepts JSON.
pub fn read_payload<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        return parse_payload(&content, false);
    }

    let content = std::fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let is_json = Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    parse_payload(&content, is_json).map_err(|e| format!("{}: {}", path, e))
}

pub fn parse_payload<T: DeserializeOwned>(content: &str, is_json: bool) -> Result<T, String> {
    if is_json {
        serde_json::from_str(content).map_err(|e| format!("Invalid JSON: {}", e))
    } else {
        serde_yaml::from_str(content).map_err(|e| format!("Invalid YAML: {}", e))
    }
}

/// Ask before destructive actions. Non-interactive sessions must pass `--yes`.
pub fn confirm(prompt: &str, yes: bool) -> Result<(), String> {
    if yes {
        return Ok(());
    }
    if !std::io::stdin().is_terminal() {
        return Err(format!("{} Refusing without --yes in a non-interactive session", prompt));
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| format!("Failed to read confirmation: {}", e))?;
    if confirmed {
        Ok(())
    } else {
        Err("Aborted".to_string())
    }
}

/// Pretty-print a value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to render output: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Output for calls the panel answers with no body.
pub fn print_done(action: &str, resource: &str, id: u64) -> Result<(), String> {
    print_json(&serde_json::json!({
        "status": "ok",
        "action": action,
        (resource): id,
    }))
}
