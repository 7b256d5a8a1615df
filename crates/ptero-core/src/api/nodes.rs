//! `/nodes` and their allocations.

use crate::error::Result;
use crate::models::{
    Allocation, ListQuery, NewAllocations, NewNode, Node, Page, Resource, ResourceList,
};
use crate::request::PanelClient;
use crate::validate;

pub struct Nodes<'a> {
    client: &'a PanelClient,
}

impl<'a> Nodes<'a> {
    pub fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Node>> {
        let list: ResourceList<Node> = self.client.get("nodes", &query.to_pairs()?).await?;
        Ok(list.into())
    }

    pub async fn get(&self, id: u64) -> Result<Node> {
        validate::id("node", id)?;
        let resource: Resource<Node> = self.client.get(&format!("nodes/{}", id), &[]).await?;
        Ok(resource.attributes)
    }

    /// Daemon configuration for the node, as the daemon expects it.
    pub async fn configuration(&self, id: u64) -> Result<serde_json::Value> {
        validate::id("node", id)?;
        self.client.get_raw(&format!("nodes/{}/configuration", id)).await
    }

    pub async fn create(&self, node: &NewNode) -> Result<Node> {
        node.validate()?;
        let resource: Resource<Node> = self.client.post("nodes", node).await?;
        tracing::info!(node_id = resource.attributes.id, fqdn = %resource.attributes.fqdn, "Node created");
        Ok(resource.attributes)
    }

    pub async fn update(&self, id: u64, node: &NewNode) -> Result<Node> {
        validate::id("node", id)?;
        node.validate()?;
        let resource: Resource<Node> = self.client.patch(&format!("nodes/{}", id), node).await?;
        Ok(resource.attributes)
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        validate::id("node", id)?;
        self.client.delete(&format!("nodes/{}", id)).await
    }

    pub async fn list_allocations(&self, node: u64, query: &ListQuery) -> Result<Page<Allocation>> {
        validate::id("node", node)?;
        let list: ResourceList<Allocation> = self
            .client
            .get(&format!("nodes/{}/allocations", node), &query.to_pairs()?)
            .await?;
        Ok(list.into())
    }

    pub async fn create_allocations(&self, node: u64, allocations: &NewAllocations) -> Result<()> {
        validate::id("node", node)?;
        allocations.validate()?;
        self.client
            .post_no_content(&format!("nodes/{}/allocations", node), allocations)
            .await
    }

    pub async fn delete_allocation(&self, node: u64, allocation: u64) -> Result<()> {
        validate::id("node", node)?;
        validate::id("allocation", allocation)?;
        self.client
            .delete(&format!("nodes/{}/allocations/{}", node, allocation))
            .await
    }
}
