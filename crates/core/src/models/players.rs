//! Player models

use super::{format_location, lenient_f64, lenient_u64};
use crate::envelope::{Envelope, PageEnvelope};
use serde::{Deserialize, Serialize};

/// Full player profile from `/player/{id}`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Player {
    pub player_id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub initials: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub player_stats: Option<PlayerStats>,
}

/// Ranking statistics embedded in a player profile
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlayerStats {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_wppr_rank: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_wppr_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub highest_rank: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_events_all_time: Option<u64>,
}

/// Envelope returned by `/player/{id}`
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerResponse {
    #[serde(default)]
    pub player: Vec<Player>,
}

/// One hit from `/player/search`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlayerSearchHit {
    pub player_id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub wppr_rank: Option<u64>,
}

/// Page returned by `/player/search`
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerSearchPage {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub search: Vec<PlayerSearchHit>,
}

impl PageEnvelope for PlayerSearchPage {
    type Item = PlayerSearchHit;

    fn into_envelope(self) -> Envelope<PlayerSearchHit> {
        Envelope::search(self.search)
    }
}

fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Player {
    pub fn name(&self) -> String {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    pub fn location(&self) -> String {
        format_location(
            self.city.as_deref(),
            self.stateprov.as_deref(),
            self.country_name.as_deref(),
        )
    }
}

impl PlayerSearchHit {
    pub fn name(&self) -> String {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    pub fn location(&self) -> String {
        format_location(
            self.city.as_deref(),
            self.stateprov.as_deref(),
            self.country_code.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::extract_items;

    #[test]
    fn test_player_search_page() {
        let json = r#"{
            "query": "Escher",
            "search": [
                {"player_id": 1605, "first_name": "Escher", "last_name": "Lefkoff",
                 "city": "Boulder", "stateprov": "CO", "country_code": "US", "wppr_rank": "2"},
                {"player_id": 99, "first_name": "Escher", "last_name": "Smith", "wppr_rank": null}
            ]
        }"#;

        let page: PlayerSearchPage = serde_json::from_str(json).unwrap();
        let hits = extract_items(page);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name(), "Escher Lefkoff");
        assert_eq!(hits[0].wppr_rank, Some(2));
        assert_eq!(hits[0].location(), "Boulder, CO, US");
        assert_eq!(hits[1].wppr_rank, None);
    }

    #[test]
    fn test_player_search_page_without_hits() {
        let page: PlayerSearchPage = serde_json::from_str(r#"{"query": "nobody"}"#).unwrap();
        assert!(extract_items(page).is_empty());
    }

    #[test]
    fn test_player_response() {
        let json = r#"{"player": [{
            "player_id": 16004, "first_name": "Keith", "last_name": "Elwin",
            "country_name": "United States",
            "player_stats": {"current_wppr_rank": 3, "current_wppr_value": "812.45", "highest_rank": "1"}
        }]}"#;

        let response: PlayerResponse = serde_json::from_str(json).unwrap();
        let player = &response.player[0];
        let stats = player.player_stats.as_ref().unwrap();

        assert_eq!(player.name(), "Keith Elwin");
        assert_eq!(stats.current_wppr_rank, Some(3));
        assert_eq!(stats.current_wppr_value, Some(812.45));
        assert_eq!(stats.highest_rank, Some(1));
    }
}
