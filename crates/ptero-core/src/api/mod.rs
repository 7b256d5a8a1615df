//! Endpoint wrappers, one type per resource family.
//!
//! Each wrapper borrows the [`PanelClient`] and is obtained from it:
//!
//! ```no_run
//! # async fn demo(client: ptero_core::PanelClient) -> ptero_core::Result<()> {
//! let user = client.users().get(3).await?;
//! client.servers().suspend(5).await?;
//! # let _ = user;
//! # Ok(())
//! # }
//! ```

pub mod databases;
pub mod locations;
pub mod nests;
pub mod nodes;
pub mod servers;
pub mod users;

pub use databases::Databases;
pub use locations::Locations;
pub use nests::Nests;
pub use nodes::Nodes;
pub use servers::Servers;
pub use users::Users;

use crate::request::PanelClient;

impl PanelClient {
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn servers(&self) -> Servers<'_> {
        Servers::new(self)
    }

    pub fn databases(&self) -> Databases<'_> {
        Databases::new(self)
    }

    pub fn locations(&self) -> Locations<'_> {
        Locations::new(self)
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(self)
    }

    pub fn nests(&self) -> Nests<'_> {
        Nests::new(self)
    }
}
