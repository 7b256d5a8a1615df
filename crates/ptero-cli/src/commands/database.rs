//! `ptero database`: server databases.

use ptero_core::models::NewDatabase;
use ptero_core::PanelClient;

use super::{confirm, describe, print_done, print_json};

pub async fn list(client: &PanelClient, server: u64, show_passwords: bool) -> Result<(), String> {
    let databases = client
        .databases()
        .list(server, show_passwords)
        .await
        .map_err(describe)?;
    print_json(&databases)
}

pub async fn get(client: &PanelClient, server: u64, id: u64, show_password: bool) -> Result<(), String> {
    let database = client
        .databases()
        .get(server, id, show_password)
        .await
        .map_err(describe)?;
    print_json(&database)
}

pub async fn create(
    client: &PanelClient,
    server: u64,
    name: &str,
    remote: &str,
    host: u64,
) -> Result<(), String> {
    let database = client
        .databases()
        .create(server, &NewDatabase::new(name, remote, host))
        .await
        .map_err(describe)?;
    print_json(&database)
}

pub async fn reset_password(client: &PanelClient, server: u64, id: u64) -> Result<(), String> {
    client
        .databases()
        .reset_password(server, id)
        .await
        .map_err(describe)?;
    print_done("reset-password", "database", id)
}

pub async fn delete(client: &PanelClient, server: u64, id: u64, yes: bool) -> Result<(), String> {
    confirm(&format!("Delete database {} of server {}?", id, server), yes)?;
    client.databases().delete(server, id).await.map_err(describe)?;
    print_done("delete", "database", id)
}
