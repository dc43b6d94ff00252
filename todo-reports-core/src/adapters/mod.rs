//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest blocking client for RecordSource
//! - Local filesystem directory for ReportStore

pub mod fs;
pub mod http;
