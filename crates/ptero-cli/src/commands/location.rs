//! `ptero location`

use ptero_core::models::{LocationUpdate, NewLocation};
use ptero_core::PanelClient;

use super::{confirm, describe, list_query, print_done, print_json};
use crate::ListArgs;

pub async fn list(client: &PanelClient, args: &ListArgs) -> Result<(), String> {
    let page = client
        .locations()
        .list(&list_query(args)?)
        .await
        .map_err(describe)?;
    print_json(&page)
}

pub async fn get(client: &PanelClient, id: u64) -> Result<(), String> {
    let location = client.locations().get(id).await.map_err(describe)?;
    print_json(&location)
}

pub async fn create(client: &PanelClient, short: &str, long: Option<String>) -> Result<(), String> {
    let location = client
        .locations()
        .create(&NewLocation {
            short: short.to_string(),
            long,
        })
        .await
        .map_err(describe)?;
    print_json(&location)
}

pub async fn update(
    client: &PanelClient,
    id: u64,
    short: Option<String>,
    long: Option<String>,
) -> Result<(), String> {
    let location = client
        .locations()
        .update(id, &LocationUpdate { short, long })
        .await
        .map_err(describe)?;
    print_json(&location)
}

pub async fn delete(client: &PanelClient, id: u64, yes: bool) -> Result<(), String> {
    confirm(&format!("Delete location {}?", id), yes)?;
    client.locations().delete(id).await.map_err(describe)?;
    print_done("delete", "location", id)
}
