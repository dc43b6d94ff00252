//! Remote record source port
//!
//! Defines the interface for reading the todos and users collections from
//! an external source (HTTP endpoints, canned data in tests, etc.)

use crate::domain::result::Result;

/// Raw response from a record source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Record source trait
///
/// Implementations perform one read per call and hand back the status and
/// body untouched. Interpreting the status is up to the caller, so a
/// non-success status is `Ok`, and `Err` is reserved for transport failures.
pub trait RecordSource: Send + Sync {
    /// Source name (e.g., "http")
    fn name(&self) -> &str;

    /// Read the collection at `url`
    fn get(&self, url: &str) -> Result<SourceResponse>;
}
