//! Service layer - the report pipeline
//!
//! Each service covers one step: fetching, aggregating, rendering and
//! writing. `ReportPipeline` runs them in order.

pub mod aggregate;
pub mod fetch;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use aggregate::{aggregate, AggregateResult, IncompleteRecord};
pub use fetch::{Endpoints, FetchService, FetchedData};
pub use pipeline::{ReportOutcome, ReportPipeline, RunEvent, RunSummary};
pub use render::{render, RenderedReport};
pub use writer::{report_key, rotated_key, ReportWriter, WrittenReport};
