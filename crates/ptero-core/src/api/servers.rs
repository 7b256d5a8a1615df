//! `/servers`: game server lifecycle.

use crate::error::{PanelError, Result};
use crate::models::{
    ListQuery, NewServer, Page, Resource, ResourceList, Server, ServerBuild, ServerDetails,
    ServerStartup,
};
use crate::request::{segment, PanelClient};
use crate::validate;

pub struct Servers<'a> {
    client: &'a PanelClient,
}

impl<'a> Servers<'a> {
    pub fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Server>> {
        let list: ResourceList<Server> = self.client.get("servers", &query.to_pairs()?).await?;
        Ok(list.into())
    }

    pub async fn get(&self, id: u64) -> Result<Server> {
        validate::id("server", id)?;
        let resource: Resource<Server> = self.client.get(&format!("servers/{}", id), &[]).await?;
        Ok(resource.attributes)
    }

    pub async fn get_by_external_id(&self, external_id: &str) -> Result<Server> {
        if external_id.trim().is_empty() {
            return Err(PanelError::invalid("external_id", "must not be empty"));
        }
        let path = format!("servers/external/{}", segment(external_id));
        let resource: Resource<Server> = self.client.get(&path, &[]).await?;
        Ok(resource.attributes)
    }

    /// The panel answers once the server row exists; installation continues
    /// on the node afterwards (`status == "installing"`).
    pub async fn create(&self, server: &NewServer) -> Result<Server> {
        server.validate()?;
        let resource: Resource<Server> = self.client.post("servers", server).await?;
        tracing::info!(
            server_id = resource.attributes.id,
            identifier = %resource.attributes.identifier,
            "Server created"
        );
        Ok(resource.attributes)
    }

    pub async fn update_details(&self, id: u64, details: &ServerDetails) -> Result<Server> {
        validate::id("server", id)?;
        details.validate()?;
        let resource: Resource<Server> = self
            .client
            .patch(&format!("servers/{}/details", id), details)
            .await?;
        Ok(resource.attributes)
    }

    pub async fn update_build(&self, id: u64, build: &ServerBuild) -> Result<Server> {
        validate::id("server", id)?;
        build.validate()?;
        let resource: Resource<Server> = self
            .client
            .patch(&format!("servers/{}/build", id), build)
            .await?;
        Ok(resource.attributes)
    }

    pub async fn update_startup(&self, id: u64, startup: &ServerStartup) -> Result<Server> {
        validate::id("server", id)?;
        startup.validate()?;
        let resource: Resource<Server> = self
            .client
            .patch(&format!("servers/{}/startup", id), startup)
            .await?;
        Ok(resource.attributes)
    }

    pub async fn suspend(&self, id: u64) -> Result<()> {
        self.action(id, "suspend").await
    }

    pub async fn unsuspend(&self, id: u64) -> Result<()> {
        self.action(id, "unsuspend").await
    }

    /// Re-runs the egg install script; server files are kept.
    pub async fn reinstall(&self, id: u64) -> Result<()> {
        self.action(id, "reinstall").await
    }

    /// `force` removes the panel record even when the node cannot be reached.
    pub async fn delete(&self, id: u64, force: bool) -> Result<()> {
        validate::id("server", id)?;
        let path = if force {
            format!("servers/{}/force", id)
        } else {
            format!("servers/{}", id)
        };
        self.client.delete(&path).await?;
        tracing::info!(server_id = id, force, "Server deleted");
        Ok(())
    }

    async fn action(&self, id: u64, action: &str) -> Result<()> {
        validate::id("server", id)?;
        self.client
            .post_empty(&format!("servers/{}/{}", id, action))
            .await?;
        tracing::info!(server_id = id, action, "Server action sent");
        Ok(())
    }
}
