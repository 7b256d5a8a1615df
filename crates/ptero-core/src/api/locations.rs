//! `/locations`: groupings of nodes.

use crate::error::Result;
use crate::models::{ListQuery, Location, LocationUpdate, NewLocation, Page, Resource, ResourceList};
use crate::request::PanelClient;
use crate::validate;

pub struct Locations<'a> {
    client: &'a PanelClient,
}

impl<'a> Locations<'a> {
    pub fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Location>> {
        let list: ResourceList<Location> = self.client.get("locations", &query.to_pairs()?).await?;
        Ok(list.into())
    }

    pub async fn get(&self, id: u64) -> Result<Location> {
        validate::id("location", id)?;
        let resource: Resource<Location> = self.client.get(&format!("locations/{}", id), &[]).await?;
        Ok(resource.attributes)
    }

    pub async fn create(&self, location: &NewLocation) -> Result<Location> {
        location.validate()?;
        let resource: Resource<Location> = self.client.post("locations", location).await?;
        Ok(resource.attributes)
    }

    pub async fn update(&self, id: u64, update: &LocationUpdate) -> Result<Location> {
        validate::id("location", id)?;
        update.validate()?;
        let resource: Resource<Location> = self
            .client
            .patch(&format!("locations/{}", id), update)
            .await?;
        Ok(resource.attributes)
    }

    /// Refused by the panel while nodes are still assigned.
    pub async fn delete(&self, id: u64) -> Result<()> {
        validate::id("location", id)?;
        self.client.delete(&format!("locations/{}", id)).await
    }
}
