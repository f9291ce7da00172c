//! Tournament director lookups and search
//!
//! Director search is not paginated: the builder only takes location filters.

use std::sync::Arc;

use ifpa_core::models::{Director, DirectorSearchHit, DirectorSearchPage};
use ifpa_core::params::ParameterSet;
use ifpa_core::Result;

use crate::query::{
    fetch, impl_query_builder, Executable, LocationFilter, QueryBuilder, QueryCore,
};
use crate::transport::Transport;

pub struct Directors {
    transport: Arc<dyn Transport>,
}

impl Directors {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, director_id: u64) -> Result<Director> {
        let path = format!("/director/{director_id}");
        fetch(self.transport.as_ref(), &path, &ParameterSet::new()).await
    }

    pub fn query(&self) -> DirectorSearch {
        DirectorSearch {
            core: QueryCore::new(self.transport.clone()),
        }
    }

    pub fn search(&self, name: impl Into<String>) -> DirectorSearch {
        self.query().with_param("name", name.into())
    }
}

/// Builder for `/director/search`
#[derive(Debug, Clone)]
pub struct DirectorSearch {
    core: QueryCore,
}

impl_query_builder!(DirectorSearch);
impl LocationFilter for DirectorSearch {}

impl DirectorSearch {
    /// Filter by director name. Can only be set once per query.
    pub fn name(&self, name: impl Into<String>) -> Result<Self> {
        self.with_unique_param("name", name.into())
    }
}

impl Executable for DirectorSearch {
    type Item = DirectorSearchHit;
    type Page = DirectorSearchPage;

    fn path(&self) -> &str {
        "/director/search"
    }
}
