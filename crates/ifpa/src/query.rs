//! Immutable query builders
//!
//! A builder is a Parameter Set plus a shared transport handle. Every filter
//! method clones the builder, sets one key on the clone and returns it, so
//! the receiver is never changed and two branches derived from the same
//! builder never share parameter storage.
//!
//! Filters are split into small traits ([`LocationFilter`],
//! [`PaginationFilter`]) that a resource builder opts into with an empty
//! `impl`. The traits only depend on [`QueryBuilder`], never on each other.

use std::sync::Arc;

use futures::future::BoxFuture;
use ifpa_core::envelope::PageEnvelope;
use ifpa_core::pagination::to_start_pos;
use ifpa_core::params::{ParamValue, ParameterSet};
use ifpa_core::{Error, Result};
use serde::de::DeserializeOwned;

use crate::transport::Transport;

/// State shared by every builder: accumulated filters and the transport
#[derive(Clone)]
pub struct QueryCore {
    transport: Arc<dyn Transport>,
    params: ParameterSet,
}

impl QueryCore {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            params: ParameterSet::new(),
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

impl std::fmt::Debug for QueryCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCore")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Base abstraction for every fluent builder
pub trait QueryBuilder: Clone {
    fn core(&self) -> &QueryCore;

    fn core_mut(&mut self) -> &mut QueryCore;

    fn params(&self) -> &ParameterSet {
        self.core().params()
    }

    /// Derive a new builder with `key` set to `value`.
    ///
    /// This is the only way a builder's filters change.
    #[must_use]
    fn with_param(&self, key: &str, value: impl Into<ParamValue>) -> Self {
        let mut next = self.clone();
        next.core_mut().params.set(key, value);
        next
    }

    /// Like [`QueryBuilder::with_param`], but `key` may only be set once per chain
    fn with_unique_param(&self, key: &str, value: impl Into<ParamValue>) -> Result<Self> {
        if self.params().contains(key) {
            return Err(Error::Configuration(format!(
                "`{key}` is already set on this query and cannot be overwritten"
            )));
        }
        Ok(self.with_param(key, value))
    }
}

/// Implements [`QueryBuilder`] for a struct with a `core: QueryCore` field
macro_rules! impl_query_builder {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::query::QueryBuilder for $ty {
                fn core(&self) -> &$crate::query::QueryCore {
                    &self.core
                }

                fn core_mut(&mut self) -> &mut $crate::query::QueryCore {
                    &mut self.core
                }
            }
        )*
    };
}

pub(crate) use impl_query_builder;

/// Country, state/province and city filters
pub trait LocationFilter: QueryBuilder {
    #[must_use]
    fn country(&self, code: impl Into<String>) -> Self {
        self.with_param("country", code.into())
    }

    #[must_use]
    fn state(&self, code: impl Into<String>) -> Self {
        self.with_param("stateprov", code.into())
    }

    #[must_use]
    fn city(&self, name: impl Into<String>) -> Self {
        self.with_param("city", name.into())
    }
}

/// Page size and offset filters
pub trait PaginationFilter: QueryBuilder {
    /// Number of items per page
    #[must_use]
    fn limit(&self, count: usize) -> Self {
        self.with_param("count", count)
    }

    /// Zero-based position of the first item; sent one-based as `start_pos`
    fn offset(&self, start_position: usize) -> Result<Self> {
        Ok(self.with_param("start_pos", to_start_pos(start_position)?))
    }
}

/// A builder that can be sent as one request returning one page
pub trait Executable: QueryBuilder + Send + Sync {
    type Item: Send + 'static;
    type Page: PageEnvelope<Item = Self::Item> + DeserializeOwned + Send;

    /// Endpoint path, relative to the API base URL
    fn path(&self) -> &str;

    fn execute(&self) -> BoxFuture<'_, Result<Self::Page>> {
        Box::pin(async move {
            fetch(self.core().transport().as_ref(), self.path(), self.params()).await
        })
    }
}

/// Issue one GET and decode the body as `T`
pub(crate) async fn fetch<T: DeserializeOwned>(
    transport: &dyn Transport,
    path: &str,
    params: &ParameterSet,
) -> Result<T> {
    let body = transport.get(path, params).await?;
    serde_json::from_value(body).map_err(Error::from)
}
