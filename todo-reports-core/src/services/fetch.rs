//! Fetch service - read todos and users from the configured endpoints

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::domain::result::{Error, Result};
use crate::domain::{RawTask, RawUser};
use crate::ports::RecordSource;

/// The two collection URLs a run reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub todos_url: String,
    pub users_url: String,
}

/// Decoded payloads of both endpoints
#[derive(Debug, Default)]
pub struct FetchedData {
    pub tasks: Vec<RawTask>,
    pub users: Vec<RawUser>,
}

/// Fetch service
pub struct FetchService {
    source: Arc<dyn RecordSource>,
    endpoints: Endpoints,
}

impl FetchService {
    pub fn new(source: Arc<dyn RecordSource>, endpoints: Endpoints) -> Self {
        Self { source, endpoints }
    }

    /// Fetch both collections
    ///
    /// Both requests are always sent before either status is looked at, so a
    /// failure reports the status of each endpoint. Nothing is retried.
    pub fn fetch_all(&self) -> Result<FetchedData> {
        let todos = self.source.get(&self.endpoints.todos_url)?;
        let users = self.source.get(&self.endpoints.users_url)?;

        if !todos.is_success() || !users.is_success() {
            return Err(Error::Fetch {
                todos_status: todos.status,
                users_status: users.status,
            });
        }

        let tasks: Vec<RawTask> = decode_collection(&todos.body, "todos")?;
        let users: Vec<RawUser> = decode_collection(&users.body, "users")?;

        info!(
            source = self.source.name(),
            tasks = tasks.len(),
            users = users.len(),
            "fetched records"
        );
        debug!(todos_url = %self.endpoints.todos_url, users_url = %self.endpoints.users_url);

        Ok(FetchedData { tasks, users })
    }
}

/// Decode a JSON array element by element
///
/// A body that is not an array fails the run. An element that is not an
/// object decodes to a record with every field absent, which the aggregator
/// then skips like any other incomplete record.
fn decode_collection<T>(body: &str, label: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned + Default,
{
    let items: Vec<JsonValue> = serde_json::from_str(body)?;

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                warn!(collection = label, index, error = %e, "unreadable record");
                T::default()
            })
        })
        .collect())
}
