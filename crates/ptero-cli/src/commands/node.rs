//! `ptero node`: nodes and allocations.

use ptero_core::models::{NewAllocations, NewNode};
use ptero_core::PanelClient;

use super::{confirm, describe, list_query, print_done, print_json, read_payload};
use crate::ListArgs;

pub async fn list(client: &PanelClient, args: &ListArgs) -> Result<(), String> {
    let page = client
        .nodes()
        .list(&list_query(args)?)
        .await
        .map_err(describe)?;
    print_json(&page)
}

pub async fn get(client: &PanelClient, id: u64) -> Result<(), String> {
    let node = client.nodes().get(id).await.map_err(describe)?;
    print_json(&node)
}

pub async fn config(client: &PanelClient, id: u64) -> Result<(), String> {
    let config = client.nodes().configuration(id).await.map_err(describe)?;
    print_json(&config)
}

pub async fn create(client: &PanelClient, file: &str) -> Result<(), String> {
    let new_node: NewNode = read_payload(file)?;
    let node = client.nodes().create(&new_node).await.map_err(describe)?;
    print_json(&node)
}

pub async fn update(client: &PanelClient, id: u64, file: &str) -> Result<(), String> {
    let update: NewNode = read_payload(file)?;
    let node = client.nodes().update(id, &update).await.map_err(describe)?;
    print_json(&node)
}

pub async fn delete(client: &PanelClient, id: u64, yes: bool) -> Result<(), String> {
    confirm(&format!("Delete node {}?", id), yes)?;
    client.nodes().delete(id).await.map_err(describe)?;
    print_done("delete", "node", id)
}

pub async fn allocations(client: &PanelClient, id: u64, args: &ListArgs) -> Result<(), String> {
    let page = client
        .nodes()
        .list_allocations(id, &list_query(args)?)
        .await
        .map_err(describe)?;
    print_json(&page)
}

pub async fn add_allocations(
    client: &PanelClient,
    id: u64,
    ip: &str,
    alias: Option<String>,
    ports: Vec<String>,
) -> Result<(), String> {
    let allocations = NewAllocations {
        ip: ip.to_string(),
        alias,
        ports,
    };
    client
        .nodes()
        .create_allocations(id, &allocations)
        .await
        .map_err(describe)?;
    print_done("add-allocations", "node", id)
}

pub async fn remove_allocation(client: &PanelClient, id: u64, allocation: u64, yes: bool) -> Result<(), String> {
    confirm(&format!("Remove allocation {} from node {}?", allocation, id), yes)?;
    client
        .nodes()
        .delete_allocation(id, allocation)
        .await
        .map_err(describe)?;
    print_done("remove-allocation", "allocation", allocation)
}
