//! `/users`: panel accounts.

use crate::error::{PanelError, Result};
use crate::models::{ListQuery, NewUser, Page, Resource, ResourceList, User, UserUpdate};
use crate::request::{segment, PanelClient};
use crate::validate;

pub struct Users<'a> {
    client: &'a PanelClient,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<User>> {
        let list: ResourceList<User> = self.client.get("users", &query.to_pairs()?).await?;
        Ok(list.into())
    }

    pub async fn get(&self, id: u64) -> Result<User> {
        validate::id("user", id)?;
        let resource: Resource<User> = self.client.get(&format!("users/{}", id), &[]).await?;
        Ok(resource.attributes)
    }

    pub async fn get_by_external_id(&self, external_id: &str) -> Result<User> {
        if external_id.trim().is_empty() {
            return Err(PanelError::invalid("external_id", "must not be empty"));
        }
        let path = format!("users/external/{}", segment(external_id));
        let resource: Resource<User> = self.client.get(&path, &[]).await?;
        Ok(resource.attributes)
    }

    pub async fn create(&self, user: &NewUser) -> Result<User> {
        user.validate()?;
        let resource: Resource<User> = self.client.post("users", user).await?;
        tracing::info!(user_id = resource.attributes.id, username = %resource.attributes.username, "User created");
        Ok(resource.attributes)
    }

    pub async fn update(&self, id: u64, update: &UserUpdate) -> Result<User> {
        validate::id("user", id)?;
        update.validate()?;
        let resource: Resource<User> = self.client.patch(&format!("users/{}", id), update).await?;
        Ok(resource.attributes)
    }

    /// Fails with a validation error while the user still owns servers.
    pub async fn delete(&self, id: u64) -> Result<()> {
        validate::id("user", id)?;
        self.client.delete(&format!("users/{}", id)).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
