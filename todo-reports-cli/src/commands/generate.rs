//! Generate command - fetch, aggregate and write all reports

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use comfy_table::Table;
use todo_reports_core::config::ConfigOverrides;
use todo_reports_core::{Error, RunEvent, RunSummary};

use super::get_context;
use crate::output::{self, Notice};

pub fn run(config_path: Option<&Path>, overrides: ConfigOverrides, dry_run: bool) -> Result<()> {
    let ctx = get_context(config_path, overrides)?;
    let now = Local::now().naive_local();

    if dry_run {
        output::warning("DRY RUN - no files will be written");
    }

    let result = ctx.pipeline.run_with_events(now, dry_run, |event| match event {
        RunEvent::Incomplete(record) => {
            output::notice(
                Notice::Skipped,
                &format!("Not enough data to build a report: {}", record),
            );
        }
        RunEvent::NoTaskSection { username } => {
            output::notice(
                Notice::NoTaskLists,
                &format!("User {} has 0 completed tasks, task lists omitted", username),
            );
        }
        RunEvent::Written(_) => {}
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(Error::Fetch {
            todos_status,
            users_status,
        }) => {
            output::error("Failed to fetch data!");
            output::error(&format!("  Todos request status: {}", todos_status));
            output::error(&format!("  Users request status: {}", users_status));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if summary.reports.is_empty() {
        output::info("No complete user records, nothing to write.");
        return Ok(());
    }

    println!("{}", summary_table(&summary));

    let verb = if summary.dry_run { "Would write" } else { "Wrote" };
    output::success(&format!(
        "{} {} report(s) to {}",
        verb,
        summary.reports.len(),
        ctx.config.output_dir.display()
    ));
    if summary.rotated_count() > 0 {
        println!("  Rotated: {} previous report(s)", summary.rotated_count());
    }
    if !summary.incomplete.is_empty() {
        println!(
            "  {} {} incomplete user record(s)",
            "Skipped:".yellow(),
            summary.incomplete.len()
        );
    }

    Ok(())
}

/// One row per report: user, task counts, file and rotated file
fn summary_table(summary: &RunSummary) -> Table {
    let mut table = output::create_table();
    table.set_header(vec!["User", "Current", "Completed", "File", "Previous moved to"]);

    for report in &summary.reports {
        table.add_row(vec![
            report.username.clone(),
            report.current.to_string(),
            report.completed.to_string(),
            report.key.clone(),
            report.rotated_to.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}
