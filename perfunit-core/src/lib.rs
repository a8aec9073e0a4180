//! Gatling `simulation.log` to JUnit XML conversion.

mod error;
mod pipeline;

pub mod aggregate;
pub mod config;
pub mod locate;
pub mod model;
pub mod parse;
pub mod record;
pub mod report;
pub mod thresholds;

pub use aggregate::{Aggregates, RequestSummary, aggregate};
pub use config::{ReportConfig, RunLayout};
pub use error::{Error, Result};
pub use locate::locate_latest_log;
pub use model::{Outcome, RequestEvent, RequestTotals, RunMetadata};
pub use parse::{ParsedRun, parse_log, parse_log_file};
pub use pipeline::{ReportOutcome, generate_report};
pub use report::{TestCase, TestSuite, build_report, write_report};
