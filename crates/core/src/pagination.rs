//! Pagination cursor arithmetic and termination rules
//!
//! Pure decisions used by the page traversal in the client crate. Nothing
//! here performs a request: the shell asks these functions where the next
//! page starts, whether the page it just received was the last one, and
//! whether a collected result set has hit its ceiling.

use crate::error::{Error, Result};

/// Page size used when a caller does not pick one
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Transient (offset, limit) pair for the next page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub page: usize,
    pub limit: usize,
}

impl Cursor {
    pub fn new(limit: usize) -> Self {
        Self { page: 0, limit }
    }

    /// Zero-based offset of the first item on the current page
    pub fn offset(&self) -> Result<usize> {
        self.page.checked_mul(self.limit).ok_or_else(|| {
            Error::Configuration(format!(
                "page {} with limit {} overflows the offset range",
                self.page, self.limit
            ))
        })
    }

    pub fn advance(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }
}

/// What a fetched page says about the rest of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// No items: the collection is exhausted
    Exhausted,
    /// Fewer items than requested: this was the last page
    Last,
    /// A full page: there may be more
    Full,
}

impl PageOutcome {
    pub fn has_more(&self) -> bool {
        matches!(self, PageOutcome::Full)
    }
}

pub fn page_outcome(items_len: usize, limit: usize) -> PageOutcome {
    if items_len == 0 {
        PageOutcome::Exhausted
    } else if items_len < limit {
        PageOutcome::Last
    } else {
        PageOutcome::Full
    }
}

/// Fail once `collected` reaches `max_results`.
///
/// Reaching the bound exactly is already an error, so callers must pass a
/// bound strictly greater than the number of results they expect.
pub fn check_bound(collected: usize, max_results: Option<usize>) -> Result<()> {
    match max_results {
        Some(max_results) if collected >= max_results => Err(Error::BoundsExceeded {
            max_results,
            collected,
        }),
        _ => Ok(()),
    }
}

/// Convert a zero-based offset to the service's one-based `start_pos`
pub fn to_start_pos(offset: usize) -> Result<u64> {
    u64::try_from(offset)
        .ok()
        .and_then(|offset| offset.checked_add(1))
        .ok_or_else(|| Error::Configuration(format!("offset {offset} is out of range")))
}
