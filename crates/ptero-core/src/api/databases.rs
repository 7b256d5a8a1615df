//! `/servers/{id}/databases`: per-server MySQL databases.

use crate::error::Result;
use crate::models::{NewDatabase, Resource, ResourceList, ServerDatabase};
use crate::request::PanelClient;
use crate::validate;

pub struct Databases<'a> {
    client: &'a PanelClient,
}

impl<'a> Databases<'a> {
    pub fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, server: u64, include_password: bool) -> Result<Vec<ServerDatabase>> {
        validate::id("server", server)?;
        let list: ResourceList<ServerDatabase> = self
            .client
            .get(&format!("servers/{}/databases", server), &include(include_password))
            .await?;
        Ok(list.data.into_iter().map(|r| r.attributes).collect())
    }

    pub async fn get(&self, server: u64, database: u64, include_password: bool) -> Result<ServerDatabase> {
        validate::id("server", server)?;
        validate::id("database", database)?;
        let resource: Resource<ServerDatabase> = self
            .client
            .get(
                &format!("servers/{}/databases/{}", server, database),
                &include(include_password),
            )
            .await?;
        Ok(resource.attributes)
    }

    pub async fn create(&self, server: u64, database: &NewDatabase) -> Result<ServerDatabase> {
        validate::id("server", server)?;
        database.validate()?;
        let resource: Resource<ServerDatabase> = self
            .client
            .post(&format!("servers/{}/databases", server), database)
            .await?;
        tracing::info!(server_id = server, database = %resource.attributes.database, "Database created");
        Ok(resource.attributes)
    }

    /// Rotates the password; fetch with `include_password` to read it.
    pub async fn reset_password(&self, server: u64, database: u64) -> Result<()> {
        validate::id("server", server)?;
        validate::id("database", database)?;
        self.client
            .post_empty(&format!("servers/{}/databases/{}/reset-password", server, database))
            .await
    }

    pub async fn delete(&self, server: u64, database: u64) -> Result<()> {
        validate::id("server", server)?;
        validate::id("database", database)?;
        self.client
            .delete(&format!("servers/{}/databases/{}", server, database))
            .await?;
        tracing::info!(server_id = server, database_id = database, "Database deleted");
        Ok(())
    }
}

fn include(include_password: bool) -> Vec<(String, String)> {
    if include_password {
        vec![("include".to_string(), "password".to_string())]
    } else {
        Vec::new()
    }
}
