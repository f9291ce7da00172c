//! Resource entry points
//!
//! [`IfpaClient`] hands out one thin handle per resource family. Each handle
//! offers lookups by id and creates the search builders for its family.

use std::sync::Arc;

use ifpa_core::Result;

use crate::config::IfpaConfig;
use crate::transport::{HttpTransport, Transport};

pub mod directors;
pub mod players;
pub mod rankings;
pub mod tournaments;

pub use directors::{DirectorSearch, Directors};
pub use players::{PlayerSearch, Players};
pub use rankings::{RankingQuery, Rankings};
pub use tournaments::{TournamentSearch, Tournaments};

/// Entry point to the IFPA API
#[derive(Clone)]
pub struct IfpaClient {
    transport: Arc<dyn Transport>,
}

impl IfpaClient {
    /// Create a client talking HTTP to the configured base URL
    pub fn new(config: &IfpaConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Create a client from `IFPA_API_KEY` / `IFPA_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(&IfpaConfig::from_env()?)
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn players(&self) -> Players {
        Players::new(self.transport.clone())
    }

    #[deprecated(since = "0.1.0", note = "use `IfpaClient::players` instead")]
    pub fn player(&self) -> Players {
        log::warn!("IfpaClient::player is deprecated, use IfpaClient::players");
        self.players()
    }

    pub fn tournaments(&self) -> Tournaments {
        Tournaments::new(self.transport.clone())
    }

    pub fn directors(&self) -> Directors {
        Directors::new(self.transport.clone())
    }

    pub fn rankings(&self) -> Rankings {
        Rankings::new(self.transport.clone())
    }
}

impl std::fmt::Debug for IfpaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IfpaClient").finish_non_exhaustive()
    }
}
