//! In-memory transports for unit tests

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use ifpa_core::params::{ParamValue, ParameterSet};
use ifpa_core::{ApiError, Error, Result};
use serde_json::{json, Value};

use crate::transport::Transport;

type Handler = dyn Fn(&str, &ParameterSet) -> Result<Value> + Send + Sync;

/// Answers every request with a closure and records what was asked
pub struct FnTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<(String, ParameterSet)>>,
}

impl FnTransport {
    pub fn new(
        handler: impl Fn(&str, &ParameterSet) -> Result<Value> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A transport that fails every request
    pub fn empty() -> Arc<Self> {
        Self::new(|path, _| Err(Error::Transport(format!("unexpected request to {path}"))))
    }

    /// Serve `pages` in order, one per request.
    ///
    /// Each entry is the number of items on that page; requests past the end
    /// fail so tests notice an extra fetch.
    pub fn pages(sizes: Vec<usize>) -> Arc<Self> {
        let next = Mutex::new(0usize);
        Self::new(move |_, _| {
            let mut idx = next.lock().unwrap();
            let size = *sizes
                .get(*idx)
                .ok_or_else(|| Error::Transport("no more scripted pages".to_string()))?;
            let first_id = sizes[..*idx].iter().sum::<usize>() as u64;
            *idx += 1;
            Ok(search_page(first_id, size))
        })
    }

    /// Serve a collection of `total` players, honoring `start_pos` and `count`
    pub fn collection(total: usize) -> Arc<Self> {
        Self::new(move |_, params| {
            let start = int_param(params, "start_pos").unwrap_or(1).max(1) as usize - 1;
            let count = int_param(params, "count").unwrap_or(100) as usize;
            let size = total.saturating_sub(start).min(count);
            Ok(search_page(start as u64, size))
        })
    }

    /// Fail every request with the given status
    pub fn status(status: u16) -> Arc<Self> {
        Self::new(move |_, _| Err(Error::Api(ApiError::new(status, "scripted failure"))))
    }

    pub fn requests(&self) -> Vec<(String, ParameterSet)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for FnTransport {
    fn get<'a>(
        &'a self,
        path: &'a str,
        params: &'a ParameterSet,
    ) -> BoxFuture<'a, Result<Value>> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), params.clone()));
        let response = (self.handler)(path, params);
        Box::pin(async move { response })
    }
}

/// A `/player/search` page holding `size` players starting at `first_id`
pub fn search_page(first_id: u64, size: usize) -> Value {
    let hits: Vec<Value> = (0..size as u64)
        .map(|i| {
            json!({
                "player_id": first_id + i,
                "first_name": "Player",
                "last_name": format!("{}", first_id + i),
            })
        })
        .collect();
    json!({"query": "test", "search": hits})
}

pub fn int_param(params: &ParameterSet, key: &str) -> Option<i64> {
    match params.get(key)? {
        ParamValue::Int(n) => Some(*n),
        ParamValue::UInt(n) => i64::try_from(*n).ok(),
        _ => None,
    }
}
