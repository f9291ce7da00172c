//! Tournament models

use super::{format_location, lenient_f64, lenient_u64};
use crate::envelope::{Envelope, PageEnvelope};
use serde::{Deserialize, Serialize};

/// Tournament detail from `/tournament/{id}`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Tournament {
    pub tournament_id: u64,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub event_start_date: Option<String>,
    #[serde(default)]
    pub event_end_date: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub director_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub player_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub event_value: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
}

/// One hit from `/tournament/search`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TournamentSearchHit {
    pub tournament_id: u64,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub event_start_date: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub player_count: Option<u64>,
}

/// Page returned by `/tournament/search`
#[derive(Debug, Deserialize, Clone)]
pub struct TournamentSearchPage {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub search: Vec<TournamentSearchHit>,
}

impl PageEnvelope for TournamentSearchPage {
    type Item = TournamentSearchHit;

    fn into_envelope(self) -> Envelope<TournamentSearchHit> {
        Envelope::search(self.search)
    }
}

impl Tournament {
    pub fn location(&self) -> String {
        format_location(
            self.city.as_deref(),
            self.stateprov.as_deref(),
            self.country_name.as_deref(),
        )
    }
}

impl TournamentSearchHit {
    pub fn location(&self) -> String {
        format_location(
            self.city.as_deref(),
            self.stateprov.as_deref(),
            self.country_code.as_deref(),
        )
    }
}
