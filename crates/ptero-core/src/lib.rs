//! Ptero Core: typed client for a game-server panel's Application API.
//!
//! Wraps the panel's administrative REST surface (`/api/application`):
//!
//! - users, servers and server databases
//! - locations, nodes and allocations
//! - nests and eggs (read only)
//!
//! Every operation validates its input, sends exactly one HTTP request
//! through [`PanelClient`] and maps the response to `Ok` or a
//! [`PanelError`]. There is no retry, caching or pagination walking.
//!
//! ```no_run
//! use ptero_core::{ListQuery, PanelClient};
//!
//! # async fn demo() -> ptero_core::Result<()> {
//! let client = PanelClient::login("https://panel.example.com", "ptla_...").await?;
//! let page = client.servers().list(&ListQuery::new().per_page(25)).await?;
//! for server in page.items {
//!     println!("{} {}", server.identifier, server.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod validate;

// Convenience re-exports
pub use config::ClientConfig;
pub use error::{ApiErrorDetail, PanelError, Result};
pub use models::{ListQuery, Page};
pub use request::PanelClient;
