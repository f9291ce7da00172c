//! Response models for each remote resource family
//!
//! Every search page implements [`PageEnvelope`](crate::envelope::PageEnvelope)
//! so it can flow through the generic page traversal.

pub mod directors;
pub mod players;
pub mod rankings;
pub mod tournaments;

pub use directors::{Director, DirectorSearchHit, DirectorSearchPage};
pub use players::{Player, PlayerResponse, PlayerSearchHit, PlayerSearchPage};
pub use rankings::{RankingEntry, RankingsPage};
pub use tournaments::{Tournament, TournamentSearchHit, TournamentSearchPage};

use serde::{Deserialize, Deserializer};

/// Join the non-empty parts of a location into one display string
pub fn format_location(
    city: Option<&str>,
    stateprov: Option<&str>,
    country: Option<&str>,
) -> String {
    [city, stateprov, country]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accept a numeric field the service sometimes sends as a string
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(u64),
        Str(String),
        Float(f64),
    }

    Ok(match Option::<NumOrString>::deserialize(deserializer)? {
        Some(NumOrString::Num(n)) => Some(n),
        Some(NumOrString::Str(s)) => s.trim().parse().ok(),
        Some(NumOrString::Float(f)) if f >= 0.0 => Some(f as u64),
        _ => None,
    })
}

/// Same as [`lenient_u64`] for decimal values such as WPPR points
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<NumOrString>::deserialize(deserializer)? {
        Some(NumOrString::Num(n)) => Some(n),
        Some(NumOrString::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}
