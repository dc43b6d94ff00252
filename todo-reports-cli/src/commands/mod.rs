//! CLI command implementations

pub mod generate;

use std::path::Path;

use anyhow::{Context, Result};
use todo_reports_core::config::{Config, ConfigOverrides};
use todo_reports_core::ReportContext;

/// Resolve configuration and build the report context
pub fn get_context(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<ReportContext> {
    let config = Config::load(config_path)
        .context("Failed to load configuration")?
        .with_overrides(overrides);

    ReportContext::new(config).context("Failed to initialize report context")
}
