//! WPPR rankings

use std::sync::Arc;

use ifpa_core::models::{RankingEntry, RankingsPage};

use crate::query::{impl_query_builder, Executable, PaginationFilter, QueryCore};
use crate::transport::Transport;

pub struct Rankings {
    transport: Arc<dyn Transport>,
}

impl Rankings {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Overall WPPR rankings, best ranked first
    pub fn wppr(&self) -> RankingQuery {
        RankingQuery {
            core: QueryCore::new(self.transport.clone()),
        }
    }
}

/// Builder for `/rankings/wppr`
#[derive(Debug, Clone)]
pub struct RankingQuery {
    core: QueryCore,
}

impl_query_builder!(RankingQuery);
impl PaginationFilter for RankingQuery {}

impl Executable for RankingQuery {
    type Item = RankingEntry;
    type Page = RankingsPage;

    fn path(&self) -> &str {
        "/rankings/wppr"
    }
}
