//! `ptero user`: panel accounts.

use ptero_core::models::{NewUser, UserUpdate};
use ptero_core::PanelClient;

use super::{confirm, describe, list_query, print_done, print_json, read_payload};
use crate::ListArgs;

pub async fn list(client: &PanelClient, args: &ListArgs) -> Result<(), String> {
    let page = client
        .users()
        .list(&list_query(args)?)
        .await
        .map_err(describe)?;
    print_json(&page)
}

pub async fn get(client: &PanelClient, id: &str, external: bool) -> Result<(), String> {
    let user = if external {
        client.users().get_by_external_id(id).await
    } else {
        let id = id
            .parse::<u64>()
            .map_err(|_| format!("Invalid user id '{}'; use --external for external ids", id))?;
        client.users().get(id).await
    }
    .map_err(describe)?;
    print_json(&user)
}

pub async fn create(client: &PanelClient, file: &str) -> Result<(), String> {
    let new_user: NewUser = read_payload(file)?;
    let user = client.users().create(&new_user).await.map_err(describe)?;
    print_json(&user)
}

pub async fn update(client: &PanelClient, id: u64, file: &str) -> Result<(), String> {
    let update: UserUpdate = read_payload(file)?;
    let user = client.users().update(id, &update).await.map_err(describe)?;
    print_json(&user)
}

pub async fn delete(client: &PanelClient, id: u64, yes: bool) -> Result<(), String> {
    confirm(&format!("Delete user {}?", id), yes)?;
    client.users().delete(id).await.map_err(describe)?;
    print_done("delete", "user", id)
}
