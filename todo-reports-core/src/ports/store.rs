//! Report store port
//!
//! A flat key-value view of wherever reports end up. Keys are file names
//! such as `ann.txt`.

use crate::domain::result::Result;

/// Report store trait
pub trait ReportStore: Send + Sync {
    /// Create the container if it does not exist yet (idempotent)
    fn ensure(&self) -> Result<()>;

    /// Whether an entry exists at `key`
    fn exists(&self, key: &str) -> Result<bool>;

    /// Move the entry at `from` to `to`, replacing anything already at `to`
    fn rename(&self, from: &str, to: &str) -> Result<()>;

    /// Create or overwrite the entry at `key`
    fn put(&self, key: &str, body: &str) -> Result<()>;

    /// Read the entry at `key`
    fn get(&self, key: &str) -> Result<String>;
}
