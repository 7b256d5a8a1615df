//! `ptero server`: game server lifecycle.

use ptero_core::models::{NewServer, ServerBuild, ServerDetails, ServerStartup};
use ptero_core::PanelClient;

use super::{confirm, describe, list_query, print_done, print_json, read_payload};
use crate::ListArgs;

pub async fn list(client: &PanelClient, args: &ListArgs) -> Result<(), String> {
    let page = client
        .servers()
        .list(&list_query(args)?)
        .await
        .map_err(describe)?;
    print_json(&page)
}

pub async fn get(client: &PanelClient, id: &str, external: bool) -> Result<(), String> {
    let server = if external {
        client.servers().get_by_external_id(id).await
    } else {
        let id = id
            .parse::<u64>()
            .map_err(|_| format!("Invalid server id '{}'; use --external for external ids", id))?;
        client.servers().get(id).await
    }
    .map_err(describe)?;
    print_json(&server)
}

pub async fn create(client: &PanelClient, file: &str) -> Result<(), String> {
    let new_server: NewServer = read_payload(file)?;
    let server = client.servers().create(&new_server).await.map_err(describe)?;
    print_json(&server)
}

pub async fn details(client: &PanelClient, id: u64, file: &str) -> Result<(), String> {
    let details: ServerDetails = read_payload(file)?;
    let server = client
        .servers()
        .update_details(id, &details)
        .await
        .map_err(describe)?;
    print_json(&server)
}

pub async fn build(client: &PanelClient, id: u64, file: &str) -> Result<(), String> {
    let build: ServerBuild = read_payload(file)?;
    let server = client
        .servers()
        .update_build(id, &build)
        .await
        .map_err(describe)?;
    print_json(&server)
}

pub async fn startup(client: &PanelClient, id: u64, file: &str) -> Result<(), String> {
    let startup: ServerStartup = read_payload(file)?;
    let server = client
        .servers()
        .update_startup(id, &startup)
        .await
        .map_err(describe)?;
    print_json(&server)
}

pub async fn suspend(client: &PanelClient, id: u64) -> Result<(), String> {
    client.servers().suspend(id).await.map_err(describe)?;
    print_done("suspend", "server", id)
}

pub async fn unsuspend(client: &PanelClient, id: u64) -> Result<(), String> {
    client.servers().unsuspend(id).await.map_err(describe)?;
    print_done("unsuspend", "server", id)
}

pub async fn reinstall(client: &PanelClient, id: u64, yes: bool) -> Result<(), String> {
    confirm(&format!("Reinstall server {}?", id), yes)?;
    client.servers().reinstall(id).await.map_err(describe)?;
    print_done("reinstall", "server", id)
}

pub async fn delete(client: &PanelClient, id: u64, force: bool, yes: bool) -> Result<(), String> {
    let prompt = if force {
        format!("Force-delete server {}? Files on the node may be left behind.", id)
    } else {
        format!("Delete server {} and all of its files?", id)
    };
    confirm(&prompt, yes)?;
    client.servers().delete(id, force).await.map_err(describe)?;
    print_done(if force { "force-delete" } else { "delete" }, "server", id)
}
