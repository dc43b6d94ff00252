//! Aggregation - join tasks onto their owning users

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::domain::{RawTask, RawUser, UserReport};

/// A user skipped for lacking one of the required fields, or for carrying a
/// value that cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub missing: Vec<&'static str>,
    /// Fields that are present but unusable, e.g. a username that is not a
    /// plain file name
    pub invalid: Vec<&'static str>,
}

impl fmt::Display for IncompleteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "<missing>".to_string())
        }

        let mut problems = Vec::new();
        if !self.missing.is_empty() {
            problems.push(format!("missing: {}", self.missing.join(", ")));
        }
        if !self.invalid.is_empty() {
            problems.push(format!("invalid: {}", self.invalid.join(", ")));
        }

        write!(
            f,
            "id={}, name={}, username={}, email={}, company.name={} ({})",
            show(&self.id),
            show(&self.name),
            show(&self.username),
            show(&self.email),
            show(&self.company_name),
            problems.join("; ")
        )
    }
}

/// Output of [`aggregate`]
#[derive(Debug, Default)]
pub struct AggregateResult {
    /// One report per valid user, in input order
    pub reports: Vec<UserReport>,
    pub incomplete: Vec<IncompleteRecord>,
}

/// Build one [`UserReport`] per user that has all required fields
///
/// A task belongs to a user when its `userId` equals the user's `id`. Tasks
/// keep their input order inside each bucket.
pub fn aggregate(users: &[RawUser], tasks: &[RawTask]) -> AggregateResult {
    let mut by_user: HashMap<i64, Vec<&RawTask>> = HashMap::new();
    for task in tasks {
        if let Some(user_id) = task.user_id {
            by_user.entry(user_id).or_default().push(task);
        }
    }

    let mut result = AggregateResult::default();

    for user in users {
        let report = match validate_user(user) {
            Ok(report) => report,
            Err(record) => {
                warn!(record = %record, "skipping incomplete user record");
                result.incomplete.push(record);
                continue;
            }
        };

        let report = by_user
            .get(&report.id)
            .into_iter()
            .flatten()
            .fold(report, |mut report, task| {
                report.push_task(task.title.as_deref().unwrap_or_default(), task.is_completed());
                report
            });

        debug!(
            username = %report.username,
            current = report.current.len(),
            completed = report.completed.len(),
            "aggregated user"
        );
        result.reports.push(report);
    }

    result
}

/// Pull the five required fields out of a raw user
fn validate_user(user: &RawUser) -> Result<UserReport, IncompleteRecord> {
    let company_name = user.company_name();
    let username = user.username.as_deref();

    let invalid: Vec<&'static str> = match username {
        Some(username) if !is_plain_file_stem(username) => vec!["username"],
        _ => Vec::new(),
    };

    match (user.id, user.name.as_deref(), username, user.email.as_deref(), company_name) {
        (Some(id), Some(name), Some(username), Some(email), Some(company)) if invalid.is_empty() => {
            Ok(UserReport::new(id, name, username, email, company))
        }
        _ => {
            let missing = [
                ("id", user.id.is_none()),
                ("name", user.name.is_none()),
                ("username", username.is_none()),
                ("email", user.email.is_none()),
                ("company.name", company_name.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();

            Err(IncompleteRecord {
                id: user.id,
                name: user.name.clone(),
                username: user.username.clone(),
                email: user.email.clone(),
                company_name: company_name.map(str::to_string),
                missing,
                invalid,
            })
        }
    }
}

/// Whether `username` names a file directly inside the report directory
///
/// Rejects the empty string, `.`, `..`, path separators and NUL.
fn is_plain_file_stem(username: &str) -> bool {
    !username.is_empty()
        && username != "."
        && username != ".."
        && !username.contains(['/', '\\', '\0'])
}
