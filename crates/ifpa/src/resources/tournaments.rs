//! Tournament lookups and search

use std::sync::Arc;

use ifpa_core::models::{Tournament, TournamentSearchHit, TournamentSearchPage};
use ifpa_core::params::ParameterSet;
use ifpa_core::Result;

use crate::query::{
    fetch, impl_query_builder, Executable, LocationFilter, PaginationFilter, QueryBuilder,
    QueryCore,
};
use crate::transport::Transport;

pub struct Tournaments {
    transport: Arc<dyn Transport>,
}

impl Tournaments {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, tournament_id: u64) -> Result<Tournament> {
        let path = format!("/tournament/{tournament_id}");
        fetch(self.transport.as_ref(), &path, &ParameterSet::new()).await
    }

    pub fn query(&self) -> TournamentSearch {
        TournamentSearch {
            core: QueryCore::new(self.transport.clone()),
        }
    }

    pub fn search(&self, name: impl Into<String>) -> TournamentSearch {
        self.query().with_param("name", name.into())
    }
}

/// Builder for `/tournament/search`
#[derive(Debug, Clone)]
pub struct TournamentSearch {
    core: QueryCore,
}

impl_query_builder!(TournamentSearch);
impl LocationFilter for TournamentSearch {}
impl PaginationFilter for TournamentSearch {}

impl TournamentSearch {
    /// Filter by tournament name. Can only be set once per query.
    pub fn name(&self, name: impl Into<String>) -> Result<Self> {
        self.with_unique_param("name", name.into())
    }

    /// Events starting on or after `date` (`YYYY-MM-DD`)
    #[must_use]
    pub fn start_date(&self, date: impl Into<String>) -> Self {
        self.with_param("start_date", date.into())
    }

    /// Events ending on or before `date` (`YYYY-MM-DD`)
    #[must_use]
    pub fn end_date(&self, date: impl Into<String>) -> Self {
        self.with_param("end_date", date.into())
    }

    #[must_use]
    pub fn tournament_type(&self, kind: impl Into<String>) -> Self {
        self.with_param("tournament_type", kind.into())
    }
}

impl Executable for TournamentSearch {
    type Item = TournamentSearchHit;
    type Page = TournamentSearchPage;

    fn path(&self) -> &str {
        "/tournament/search"
    }
}
