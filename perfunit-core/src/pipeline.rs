use std::path::PathBuf;

use crate::config::ReportConfig;
use crate::locate::locate_latest_log;
use crate::model::RequestTotals;
use crate::parse::parse_log_file;
use crate::report::{build_report, write_report};
use crate::Result;

/// What a completed run produced, for the caller's summary output.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub log_path: PathBuf,
    pub report_path: PathBuf,
    pub simulation_name: String,
    pub totals: RequestTotals,
    pub duration_secs: f64,
    pub tests: usize,
    pub failures: usize,
    pub skipped_records: u64,
}

/// Locate, parse, aggregate, build and write, in that order.
pub fn generate_report(config: &ReportConfig) -> Result<ReportOutcome> {
    let log_path = match &config.log_file {
        Some(path) => path.clone(),
        None => locate_latest_log(&config.layout)?,
    };

    let run = parse_log_file(&log_path)?;
    let suite = build_report(&run);

    let report_path = config.output_path();
    write_report(&report_path, &suite)?;

    Ok(ReportOutcome {
        log_path,
        report_path,
        simulation_name: suite.name.clone(),
        totals: run.totals,
        duration_secs: suite.time_secs,
        tests: suite.tests(),
        failures: suite.failures(),
        skipped_records: run.skipped_records,
    })
}
