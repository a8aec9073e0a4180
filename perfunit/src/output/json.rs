use serde::Serialize;
use std::io::Write as _;

use super::OutputFormatter;

pub(crate) struct JsonOutput;

impl OutputFormatter for JsonOutput {
    fn print_summary(&self, outcome: &perfunit_core::ReportOutcome) -> anyhow::Result<()> {
        let line = build_summary_line(outcome);
        let mut out = std::io::stdout().lock();
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonSummaryLine {
    pub kind: &'static str,
    pub simulation: String,
    pub log_file: String,
    pub report_file: String,

    pub requests_total: u64,
    pub requests_successful: u64,
    pub requests_failed: u64,
    pub success_rate_percent: Option<f64>,
    pub duration_secs: f64,

    pub tests: usize,
    pub assertion_failures: usize,
    pub skipped_records: u64,
}

fn build_summary_line(outcome: &perfunit_core::ReportOutcome) -> JsonSummaryLine {
    JsonSummaryLine {
        kind: "summary",
        simulation: outcome.simulation_name.clone(),
        log_file: outcome.log_path.display().to_string(),
        report_file: outcome.report_path.display().to_string(),
        requests_total: outcome.totals.total,
        requests_successful: outcome.totals.successful,
        requests_failed: outcome.totals.failed,
        success_rate_percent: outcome.totals.success_rate_percent(),
        duration_secs: outcome.duration_secs,
        tests: outcome.tests,
        assertion_failures: outcome.failures,
        skipped_records: outcome.skipped_records,
    }
}
