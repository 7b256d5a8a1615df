//! `ptero nest`: nests and eggs (read only).

use ptero_core::PanelClient;

use super::{describe, list_query, print_json};
use crate::ListArgs;

pub async fn list(client: &PanelClient, args: &ListArgs) -> Result<(), String> {
    let page = client
        .nests()
        .list(&list_query(args)?)
        .await
        .map_err(describe)?;
    print_json(&page)
}

pub async fn get(client: &PanelClient, id: u64) -> Result<(), String> {
    let nest = client.nests().get(id).await.map_err(describe)?;
    print_json(&nest)
}

pub async fn eggs(client: &PanelClient, nest: u64) -> Result<(), String> {
    let eggs = client.nests().list_eggs(nest).await.map_err(describe)?;
    print_json(&eggs)
}

pub async fn egg(client: &PanelClient, nest: u64, id: u64) -> Result<(), String> {
    let egg = client.nests().get_egg(nest, id).await.map_err(describe)?;
    print_json(&egg)
}
