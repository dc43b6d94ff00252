//! Report pipeline - fetch, aggregate, render and write in one pass

use chrono::NaiveDateTime;
use tracing::info;

use crate::domain::result::Result;
use crate::services::aggregate::{aggregate, IncompleteRecord};
use crate::services::fetch::FetchService;
use crate::services::render::render;
use crate::services::writer::{report_key, ReportWriter};

/// Something the operator should hear about while the run is in progress
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    /// A user was skipped for missing or unusable required fields
    Incomplete(&'a IncompleteRecord),
    /// A report was written without task lists
    NoTaskSection { username: &'a str },
    /// A report was written (or would be, in a dry run)
    Written(&'a ReportOutcome),
}

/// Per-user result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub username: String,
    pub key: String,
    pub rotated_to: Option<String>,
    pub current: usize,
    pub completed: usize,
    pub task_section: bool,
}

/// Summary of a finished run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub dry_run: bool,
    pub reports: Vec<ReportOutcome>,
    pub incomplete: Vec<IncompleteRecord>,
}

impl RunSummary {
    /// Usernames whose report was written without task lists
    pub fn without_task_section(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| !r.task_section)
            .map(|r| r.username.as_str())
            .collect()
    }

    pub fn rotated_count(&self) -> usize {
        self.reports.iter().filter(|r| r.rotated_to.is_some()).count()
    }
}

/// Report pipeline
pub struct ReportPipeline {
    fetch_service: FetchService,
    writer: ReportWriter,
}

impl ReportPipeline {
    pub fn new(fetch_service: FetchService, writer: ReportWriter) -> Self {
        Self {
            fetch_service,
            writer,
        }
    }

    /// Run once and collect the outcome
    pub fn run(&self, now: NaiveDateTime, dry_run: bool) -> Result<RunSummary> {
        self.run_with_events(now, dry_run, |_| {})
    }

    /// Run once, reporting progress through `on_event`
    ///
    /// Both fetches complete before anything else happens; a fetch failure
    /// returns before the report container is touched. Reports are written
    /// one user at a time, so a failure part-way leaves earlier reports in
    /// place. With `dry_run` nothing is created or written.
    pub fn run_with_events<F>(
        &self,
        now: NaiveDateTime,
        dry_run: bool,
        mut on_event: F,
    ) -> Result<RunSummary>
    where
        F: FnMut(RunEvent<'_>),
    {
        let data = self.fetch_service.fetch_all()?;
        let aggregated = aggregate(&data.users, &data.tasks);

        for record in &aggregated.incomplete {
            on_event(RunEvent::Incomplete(record));
        }

        if !dry_run {
            self.writer.prepare()?;
        }

        let mut reports = Vec::with_capacity(aggregated.reports.len());
        for report in &aggregated.reports {
            let rendered = render(report, now);

            if !rendered.task_section {
                on_event(RunEvent::NoTaskSection {
                    username: &report.username,
                });
            }

            let (key, rotated_to) = if dry_run {
                (report_key(&report.username), None)
            } else {
                let written = self.writer.write(&report.username, &rendered.body, now)?;
                (written.key, written.rotated_to)
            };

            let outcome = ReportOutcome {
                username: report.username.clone(),
                key,
                rotated_to,
                current: report.current.len(),
                completed: report.completed.len(),
                task_section: rendered.task_section,
            };
            on_event(RunEvent::Written(&outcome));
            reports.push(outcome);
        }

        info!(
            reports = reports.len(),
            skipped = aggregated.incomplete.len(),
            dry_run,
            "run finished"
        );

        Ok(RunSummary {
            dry_run,
            reports,
            incomplete: aggregated.incomplete,
        })
    }
}
