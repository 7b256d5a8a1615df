//! `ptero login` / `ptero logout`: saved credentials.

use std::time::Duration;

use ptero_core::{ClientConfig, PanelClient};

use super::{credential_store, describe, print_json};
use crate::credentials::Credentials;
use crate::ConnectionArgs;

pub async fn login(conn: &ConnectionArgs) -> Result<(), String> {
    let url = conn
        .url
        .clone()
        .ok_or("Missing --url (or PTERO_URL) for the panel to log in to")?;
    let key = match &conn.key {
        Some(key) => key.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Application API key")
            .interact()
            .map_err(|e| format!("Failed to read API key: {}", e))?,
    };

    let mut config = ClientConfig::new(url.as_str(), key.as_str());
    if let Some(secs) = conn.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = PanelClient::new(config).map_err(describe)?;
    client.verify().await.map_err(describe)?;

    let store = credential_store(conn);
    store.save(&Credentials {
        url,
        api_key: key,
        timeout_secs: conn.timeout,
    })?;

    print_json(&serde_json::json!({
        "status": "ok",
        "api_root": client.api_root(),
        "credentials": store.path().display().to_string(),
    }))
}

pub fn logout(conn: &ConnectionArgs) -> Result<(), String> {
    let store = credential_store(conn);
    let removed = store.remove()?;
    print_json(&serde_json::json!({
        "status": "ok",
        "removed": removed,
        "credentials": store.path().display().to_string(),
    }))
}
