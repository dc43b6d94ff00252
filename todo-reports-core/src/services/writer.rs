//! Report writer - store a report, rotating the previous one out of the way

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::result::Result;
use crate::ports::ReportStore;

/// Timestamp embedded in rotated file names
const ROTATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Where a report ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub key: String,
    /// Key the previous report was moved to, if there was one
    pub rotated_to: Option<String>,
}

/// Report writer
pub struct ReportWriter {
    store: Arc<dyn ReportStore>,
}

impl ReportWriter {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Create the report container if needed
    pub fn prepare(&self) -> Result<()> {
        self.store.ensure()
    }

    /// Write `body` as `{username}.txt`
    ///
    /// An existing report is first renamed to
    /// `old_{username}_{YYYY-MM-DDTHH:MM}.txt`. Rotation keeps one level per
    /// minute: a second write in the same minute replaces the earlier
    /// rotated copy.
    pub fn write(&self, username: &str, body: &str, now: NaiveDateTime) -> Result<WrittenReport> {
        let key = report_key(username);

        let rotated_to = if self.store.exists(&key)? {
            let old_key = rotated_key(username, now);
            debug!(from = %key, to = %old_key, "rotating previous report");
            self.store.rename(&key, &old_key)?;
            Some(old_key)
        } else {
            None
        };

        self.store.put(&key, body)?;
        debug!(key = %key, bytes = body.len(), "wrote report");

        Ok(WrittenReport { key, rotated_to })
    }
}

/// Store key of a user's current report
pub fn report_key(username: &str) -> String {
    format!("{}.txt", username)
}

/// Store key a previous report is rotated to
pub fn rotated_key(username: &str, now: NaiveDateTime) -> String {
    format!("old_{}_{}.txt", username, now.format(ROTATION_TIME_FORMAT))
}
