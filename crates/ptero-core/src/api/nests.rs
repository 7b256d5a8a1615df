//! `/nests` and their eggs. Read only.

use crate::error::Result;
use crate::models::{Egg, ListQuery, Nest, Page, Resource, ResourceList};
use crate::request::PanelClient;
use crate::validate;

pub struct Nests<'a> {
    client: &'a PanelClient,
}

impl<'a> Nests<'a> {
    pub fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Nest>> {
        let list: ResourceList<Nest> = self.client.get("nests", &query.to_pairs()?).await?;
        Ok(list.into())
    }

    pub async fn get(&self, id: u64) -> Result<Nest> {
        validate::id("nest", id)?;
        let resource: Resource<Nest> = self.client.get(&format!("nests/{}", id), &[]).await?;
        Ok(resource.attributes)
    }

    pub async fn list_eggs(&self, nest: u64) -> Result<Vec<Egg>> {
        validate::id("nest", nest)?;
        let list: ResourceList<Egg> = self.client.get(&format!("nests/{}/eggs", nest), &[]).await?;
        Ok(list.data.into_iter().map(|r| r.attributes).collect())
    }

    pub async fn get_egg(&self, nest: u64, egg: u64) -> Result<Egg> {
        validate::id("nest", nest)?;
        validate::id("egg", egg)?;
        let resource: Resource<Egg> = self
            .client
            .get(&format!("nests/{}/eggs/{}", nest, egg), &[])
            .await?;
        Ok(resource.attributes)
    }
}
