//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Per-user diagnostics raised while a run is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The user record could not be turned into a report
    Skipped,
    /// The report was written without task lists
    NoTaskLists,
}

impl Notice {
    fn marker(self) -> &'static str {
        match self {
            Notice::Skipped => "[-]",
            Notice::NoTaskLists => "[!]",
        }
    }
}

/// `[-] msg` / `[!] msg`
pub fn notice_line(kind: Notice, msg: &str) -> String {
    format!("{} {}", kind.marker(), msg)
}

/// Print a run diagnostic, marker first
pub fn notice(kind: Notice, msg: &str) {
    let line = notice_line(kind, msg);
    match kind {
        Notice::Skipped => println!("{}", line.yellow()),
        Notice::NoTaskLists => println!("{}", line.bright_yellow()),
    }
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
