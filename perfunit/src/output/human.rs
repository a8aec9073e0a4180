use std::fmt::Write as _;
use std::io::Write as _;

use super::OutputFormatter;

pub(crate) struct HumanReadableOutput;

impl OutputFormatter for HumanReadableOutput {
    fn print_summary(&self, outcome: &perfunit_core::ReportOutcome) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(render(outcome).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

pub(crate) fn render(outcome: &perfunit_core::ReportOutcome) -> String {
    let totals = &outcome.totals;
    let mut out = String::new();

    writeln!(
        out,
        "JUnit XML report generated: {}",
        outcome.report_path.display()
    )
    .ok();
    writeln!(out, "Total requests: {}", totals.total).ok();
    writeln!(out, "Successful: {}", totals.successful).ok();
    writeln!(out, "Failed: {}", totals.failed).ok();
    match totals.success_rate_percent() {
        Some(rate) => writeln!(out, "Success rate: {rate:.2}%").ok(),
        None => writeln!(out, "Success rate: N/A").ok(),
    };
    writeln!(out, "Test duration: {:.2} seconds", outcome.duration_secs).ok();
    writeln!(
        out,
        "Test cases: {} ({} assertion failures)",
        outcome.tests, outcome.failures
    )
    .ok();
    if outcome.skipped_records > 0 {
        writeln!(out, "Skipped malformed records: {}", outcome.skipped_records).ok();
    }

    out
}
