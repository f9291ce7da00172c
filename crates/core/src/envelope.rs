//! Response envelope shapes and item extraction
//!
//! Resource endpoints wrap their item lists in one of a small set of known
//! shapes: a `search` list, a `results` list, or a bare array. Every typed
//! page maps itself onto an [`Envelope`] and [`extract_items`] picks the
//! list to hand back.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The known places a page may carry its items
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub search: Option<Vec<T>>,
    pub results: Option<Vec<T>>,
    pub flat: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    /// A page with no recognized item list
    pub fn unrecognized() -> Self {
        Self {
            search: None,
            results: None,
            flat: None,
        }
    }

    pub fn search(items: Vec<T>) -> Self {
        Self {
            search: Some(items),
            ..Self::unrecognized()
        }
    }

    pub fn results(items: Vec<T>) -> Self {
        Self {
            results: Some(items),
            ..Self::unrecognized()
        }
    }

    pub fn flat(items: Vec<T>) -> Self {
        Self {
            flat: Some(items),
            ..Self::unrecognized()
        }
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self::unrecognized()
    }
}

/// A page type whose items can be extracted
pub trait PageEnvelope {
    type Item;

    fn into_envelope(self) -> Envelope<Self::Item>;
}

impl<T> PageEnvelope for Vec<T> {
    type Item = T;

    fn into_envelope(self) -> Envelope<T> {
        Envelope::flat(self)
    }
}

impl<T> PageEnvelope for Envelope<T> {
    type Item = T;

    fn into_envelope(self) -> Envelope<T> {
        self
    }
}

/// A page whose shape is only known at runtime
///
/// Arrays decode as a flat list. Objects decode the first of `search` or
/// `results` that holds a list; a malformed item in that list is a decode
/// error. Anything else is kept as [`RawPage::Unrecognized`].
#[derive(Debug, Clone)]
pub enum RawPage<T> {
    Flat(Vec<T>),
    Keyed {
        search: Option<Vec<T>>,
        results: Option<Vec<T>>,
    },
    Unrecognized(Value),
}

impl<'de, T> Deserialize<'de> for RawPage<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let list = |key: &str| match value.get(key) {
            Some(items @ Value::Array(_)) => Vec::<T>::deserialize(items).map(Some),
            _ => Ok(None),
        };

        let page = match &value {
            Value::Array(_) => {
                RawPage::Flat(Vec::<T>::deserialize(&value).map_err(D::Error::custom)?)
            }
            Value::Object(_) => match list("search").map_err(D::Error::custom)? {
                Some(search) => RawPage::Keyed {
                    search: Some(search),
                    results: None,
                },
                None => match list("results").map_err(D::Error::custom)? {
                    Some(results) => RawPage::Keyed {
                        search: None,
                        results: Some(results),
                    },
                    None => RawPage::Unrecognized(value.clone()),
                },
            },
            _ => RawPage::Unrecognized(value.clone()),
        };

        Ok(page)
    }
}

impl<T> PageEnvelope for RawPage<T> {
    type Item = T;

    fn into_envelope(self) -> Envelope<T> {
        match self {
            RawPage::Flat(items) => Envelope::flat(items),
            RawPage::Keyed { search, results } => Envelope {
                search,
                results,
                flat: None,
            },
            RawPage::Unrecognized(_) => Envelope::unrecognized(),
        }
    }
}

/// Extract the item list from a page.
///
/// Priority is `search`, then `results`, then a flat list. A page matching
/// none of them yields an empty list rather than an error.
pub fn extract_items<P: PageEnvelope>(page: P) -> Vec<P::Item> {
    let Envelope {
        search,
        results,
        flat,
    } = page.into_envelope();

    search.or(results).or(flat).unwrap_or_default()
}
