//! Report rendering - turn a [`UserReport`] into the report text

use chrono::NaiveDateTime;

use crate::domain::UserReport;

/// Timestamp shown in the report header
const HEADER_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Rendered report body plus what the renderer decided about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub body: String,
    /// False when the task lists were left out (user has no completed tasks)
    pub task_section: bool,
}

/// Render the report for one user
///
/// Layout:
///
/// ```text
/// # Отчёт для {company}.
/// {name} <{email}> {DD.MM.YYYY HH:MM}
/// Всего задач: {total}
///
/// ## Актуальные задачи ({current_count}):
/// -{current titles, one per line}
///
/// ## Завершённые задачи ({completed_count}):
/// -{completed titles, one per line}
/// ```
///
/// The two task lists are only written when the user has at least one
/// completed task. There is no trailing newline.
pub fn render(report: &UserReport, now: NaiveDateTime) -> RenderedReport {
    let mut body = format!(
        "# Отчёт для {company}.\n{name} <{email}> {time}\nВсего задач: {total}",
        company = report.company_name,
        name = report.name,
        email = report.email,
        time = now.format(HEADER_TIME_FORMAT),
        total = report.total_tasks(),
    );

    let task_section = !report.completed.is_empty();
    if task_section {
        body.push_str(&format!(
            "\n\n## Актуальные задачи ({current_count}):\n-{current}\
             \n\n## Завершённые задачи ({completed_count}):\n-{completed}",
            current_count = report.current.len(),
            current = report.current_titles().join("\n-"),
            completed_count = report.completed.len(),
            completed = report.completed_titles().join("\n-"),
        ));
    }

    RenderedReport { body, task_section }
}
