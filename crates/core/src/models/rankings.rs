//! Ranking models

use super::{lenient_f64, lenient_u64};
use crate::envelope::{Envelope, PageEnvelope};
use serde::{Deserialize, Serialize};

/// One row of the WPPR rankings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RankingEntry {
    pub player_id: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_rank: Option<u64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub wppr_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub event_count: Option<u64>,
}

/// Page returned by `/rankings/wppr`
///
/// The ranking rows are exposed to the extractor as a `results` list.
#[derive(Debug, Deserialize, Clone)]
pub struct RankingsPage {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub rankings: Vec<RankingEntry>,
}

impl PageEnvelope for RankingsPage {
    type Item = RankingEntry;

    fn into_envelope(self) -> Envelope<RankingEntry> {
        Envelope::results(self.rankings)
    }
}

impl RankingEntry {
    pub fn name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
