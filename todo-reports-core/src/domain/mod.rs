//! Core domain entities
//!
//! Plain data: the raw endpoint records, the per-user report aggregate and
//! the error type. No I/O happens here.

mod raw;
mod report;
pub mod result;

pub use raw::{RawCompany, RawTask, RawUser};
pub use report::{format_title, TaskView, UserReport, MAX_TITLE_CHARS};
