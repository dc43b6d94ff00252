//! Per-user report aggregate

/// Longest title shown as-is; longer ones are cut to this many characters
pub const MAX_TITLE_CHARS: usize = 46;

const ELLIPSIS: &str = "...";

/// Shorten a task title for display
///
/// Length is counted in Unicode scalar values, so Cyrillic titles are cut
/// at the same visual point as ASCII ones.
pub fn format_title(title: &str) -> String {
    match title.char_indices().nth(MAX_TITLE_CHARS) {
        Some((cut, _)) => format!("{}{}", &title[..cut], ELLIPSIS),
        None => title.to_string(),
    }
}

/// A task reduced to its display title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub title: String,
}

impl TaskView {
    pub fn new(title: &str) -> Self {
        Self {
            title: format_title(title),
        }
    }
}

/// One user's tasks, split by completion
///
/// Built once per run by the aggregator and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub company_name: String,
    pub current: Vec<TaskView>,
    pub completed: Vec<TaskView>,
}

impl UserReport {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: email.into(),
            company_name: company_name.into(),
            current: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Route a task into the bucket matching its completion flag
    pub(crate) fn push_task(&mut self, title: &str, completed: bool) {
        let view = TaskView::new(title);
        if completed {
            self.completed.push(view);
        } else {
            self.current.push(view);
        }
    }

    pub fn total_tasks(&self) -> usize {
        self.current.len() + self.completed.len()
    }

    pub fn current_titles(&self) -> Vec<&str> {
        self.current.iter().map(|t| t.title.as_str()).collect()
    }

    pub fn completed_titles(&self) -> Vec<&str> {
        self.completed.iter().map(|t| t.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(format_title("Buy milk"), "Buy milk");
        assert_eq!(format_title(""), "");
    }

    #[test]
    fn test_title_at_limit_unchanged() {
        let title = "a".repeat(MAX_TITLE_CHARS);
        assert_eq!(format_title(&title), title);
    }

    #[test]
    fn test_title_one_over_limit_truncated() {
        let title = "b".repeat(MAX_TITLE_CHARS + 1);
        let formatted = format_title(&title);
        assert_eq!(formatted, format!("{}...", "b".repeat(MAX_TITLE_CHARS)));
    }

    #[test]
    fn test_sixty_char_title() {
        let title: String = ('a'..='z').cycle().take(60).collect();
        let formatted = format_title(&title);
        assert_eq!(formatted.chars().count(), MAX_TITLE_CHARS + 3);
        assert_eq!(&formatted[..MAX_TITLE_CHARS], &title[..MAX_TITLE_CHARS]);
        assert!(formatted.ends_with("..."));
    }

    #[test]
    fn test_cyrillic_title_cut_on_char_boundary() {
        let title = "ж".repeat(50);
        let formatted = format_title(&title);
        assert_eq!(formatted, format!("{}...", "ж".repeat(MAX_TITLE_CHARS)));
    }

    #[test]
    fn test_formatted_length_is_bounded() {
        for len in [0, 1, 45, 46, 47, 100, 1000] {
            let title = "x".repeat(len);
            let formatted = format_title(&title);
            assert!(formatted.chars().count() <= MAX_TITLE_CHARS + 3);
            if len <= MAX_TITLE_CHARS {
                assert_eq!(formatted, title);
            }
        }
    }

    #[test]
    fn test_push_task_routes_by_flag() {
        let mut report = UserReport::new(1, "Ann", "ann", "a@x.com", "Acme");
        report.push_task("Buy milk", false);
        report.push_task("Ship release", true);
        assert_eq!(report.current_titles(), vec!["Buy milk"]);
        assert_eq!(report.completed_titles(), vec!["Ship release"]);
        assert_eq!(report.total_tasks(), 2);
    }
}
