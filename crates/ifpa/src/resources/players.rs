//! Player lookups and search

use std::sync::Arc;

use ifpa_core::models::{Player, PlayerResponse, PlayerSearchHit, PlayerSearchPage};
use ifpa_core::params::ParameterSet;
use ifpa_core::{Error, Result};

use crate::query::{
    fetch, impl_query_builder, Executable, LocationFilter, PaginationFilter, QueryBuilder,
    QueryCore,
};
use crate::transport::Transport;

pub struct Players {
    transport: Arc<dyn Transport>,
}

impl Players {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch one player profile by id
    pub async fn get(&self, player_id: u64) -> Result<Player> {
        let path = format!("/player/{player_id}");
        let response: PlayerResponse =
            fetch(self.transport.as_ref(), &path, &ParameterSet::new()).await?;

        response.player.into_iter().next().ok_or(Error::EmptyResult)
    }

    /// Search builder with no filters applied
    pub fn query(&self) -> PlayerSearch {
        PlayerSearch {
            core: QueryCore::new(self.transport.clone()),
        }
    }

    /// Search builder filtered by player name
    pub fn search(&self, name: impl Into<String>) -> PlayerSearch {
        self.query().with_param("name", name.into())
    }
}

/// Builder for `/player/search`
#[derive(Debug, Clone)]
pub struct PlayerSearch {
    core: QueryCore,
}

impl_query_builder!(PlayerSearch);
impl LocationFilter for PlayerSearch {}
impl PaginationFilter for PlayerSearch {}

impl PlayerSearch {
    /// Filter by name. Can only be set once per query.
    pub fn name(&self, name: impl Into<String>) -> Result<Self> {
        self.with_unique_param("name", name.into())
    }

    /// Only players who took part in a tournament matching `name`
    #[must_use]
    pub fn tournament(&self, name: impl Into<String>) -> Self {
        self.with_param("tournament", name.into())
    }
}

impl Executable for PlayerSearch {
    type Item = PlayerSearchHit;
    type Page = PlayerSearchPage;

    fn path(&self) -> &str {
        "/player/search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::FetchExt;
    use crate::testing::FnTransport;
    use ifpa_core::params::ParamValue;
    use serde_json::json;

    fn players(transport: Arc<FnTransport>) -> Players {
        Players::new(transport)
    }

    #[test]
    fn test_search_then_name_is_configuration_error() {
        let transport = FnTransport::empty();
        let result = players(transport.clone()).search("A").name("B");

        assert!(matches!(result, Err(Error::Configuration(_))));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_name_on_unfiltered_query() {
        let query = players(FnTransport::empty())
            .query()
            .country("US")
            .name("Elwin")
            .unwrap();

        assert_eq!(query.params().get("name"), Some(&ParamValue::from("Elwin")));
        assert_eq!(query.params().len(), 2);
    }

    #[tokio::test]
    async fn test_search_sends_filters() {
        let transport = FnTransport::pages(vec![1]);
        players(transport.clone())
            .search("Sharpe")
            .state("IL")
            .tournament("Pinburgh")
            .limit(10)
            .execute()
            .await
            .unwrap();

        let (path, params) = &transport.requests()[0];
        assert_eq!(path, "/player/search");
        assert_eq!(
            params.to_query_string(),
            "name=Sharpe&stateprov=IL&tournament=Pinburgh&count=10"
        );
    }

    #[tokio::test]
    async fn test_get_player() {
        let transport = FnTransport::new(|path, _| {
            assert_eq!(path, "/player/16004");
            Ok(json!({
                "player": [{"player_id": 16004, "first_name": "Keith", "last_name": "Elwin"}]
            }))
        });

        let player = players(transport).get(16004).await.unwrap();
        assert_eq!(player.name(), "Keith Elwin");
    }

    #[tokio::test]
    async fn test_get_player_empty_envelope() {
        let transport = FnTransport::new(|_, _| Ok(json!({"player": []})));
        let err = players(transport).get(1).await.unwrap_err();
        assert!(matches!(err, Error::EmptyResult));
    }

    #[tokio::test]
    async fn test_get_player_not_found_propagates() {
        let err = players(FnTransport::status(404)).get(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_first_hit() {
        let transport = FnTransport::pages(vec![4]);
        let hit = players(transport).search("Player").first().await.unwrap();
        assert_eq!(hit.name(), "Player 0");
    }
}
