//! Typed client for the IFPA tournament-ranking API
//!
//! This crate is the **Imperative Shell** around `ifpa_core`: it owns the
//! HTTP transport, the fluent query builders and the page traversal that
//! drives them.
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use ifpa::prelude::*;
//!
//! let client = IfpaClient::from_env()?;
//!
//! // One page
//! let hit = client.players().search("Elwin").first().await?;
//!
//! // Every page, lazily
//! let mut events = client.tournaments().query().state("IL").iterate(Some(50));
//! while let Some(event) = events.try_next().await? {
//!     println!("{:?}", event.tournament_name);
//! }
//!
//! // Every page, eagerly, refusing to collect 1000 results or more
//! let top = client.rankings().wppr().collect_all(Some(100), Some(1000)).await?;
//! ```

pub mod config;
pub mod paginate;
pub mod query;
pub mod resources;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::IfpaConfig;
pub use ifpa_core::{ApiError, Error, ErrorKind, Result};
pub use resources::IfpaClient;

/// Traits and types needed to build and run queries
pub mod prelude {
    pub use crate::paginate::{FetchExt, Paginate};
    pub use crate::query::{Executable, LocationFilter, PaginationFilter, QueryBuilder};
    pub use crate::{Error, IfpaClient, IfpaConfig, Result};
}
