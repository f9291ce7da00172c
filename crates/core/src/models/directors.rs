//! Tournament director models

use super::{format_location, lenient_u64};
use crate::envelope::{Envelope, PageEnvelope};
use serde::{Deserialize, Serialize};

/// Director detail from `/director/{id}`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Director {
    pub director_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub tournament_count: Option<u64>,
}

/// One hit from `/director/search`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DirectorSearchHit {
    pub director_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub tournament_count: Option<u64>,
}

/// Page returned by `/director/search`
#[derive(Debug, Deserialize, Clone)]
pub struct DirectorSearchPage {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub results: Vec<DirectorSearchHit>,
}

impl PageEnvelope for DirectorSearchPage {
    type Item = DirectorSearchHit;

    fn into_envelope(self) -> Envelope<DirectorSearchHit> {
        Envelope::results(self.results)
    }
}

impl Director {
    pub fn location(&self) -> String {
        format_location(
            self.city.as_deref(),
            self.stateprov.as_deref(),
            self.country_name.as_deref(),
        )
    }
}

impl DirectorSearchHit {
    pub fn location(&self) -> String {
        format_location(
            self.city.as_deref(),
            self.stateprov.as_deref(),
            self.country_code.as_deref(),
        )
    }
}
