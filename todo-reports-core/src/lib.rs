//! todo-reports core - per-user task reports from the todos and users endpoints
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: Raw endpoint records, the `UserReport` aggregate, errors
//! - **ports**: Traits for external dependencies (RecordSource, ReportStore)
//! - **services**: Fetch, aggregate, render, write and the pipeline driving them
//! - **adapters**: Concrete implementations (reqwest, local filesystem)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;

use adapters::fs::FsReportStore;
use adapters::http::HttpRecordSource;
use config::Config;
use services::{FetchService, ReportPipeline, ReportWriter};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{RawTask, RawUser, TaskView, UserReport};
pub use services::{ReportOutcome, RunEvent, RunSummary};

/// Main context for a reporting run
///
/// Holds the resolved configuration and a pipeline wired to the HTTP source
/// and the filesystem store.
pub struct ReportContext {
    pub config: Config,
    pub pipeline: ReportPipeline,
}

impl ReportContext {
    /// Create a new context from a resolved configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let source = Arc::new(HttpRecordSource::new(config.timeout)?);
        let store = Arc::new(FsReportStore::new(config.output_dir.clone()));

        let fetch_service = FetchService::new(source, config.endpoints());
        let writer = ReportWriter::new(store);
        let pipeline = ReportPipeline::new(fetch_service, writer);

        Ok(Self { config, pipeline })
    }
}
