use crate::cli::OutputFormat;

mod human;
mod json;

pub(crate) trait OutputFormatter {
    fn print_summary(&self, outcome: &perfunit_core::ReportOutcome) -> anyhow::Result<()>;
}

pub(crate) fn formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::HumanReadable => Box::new(human::HumanReadableOutput),
        OutputFormat::Json => Box::new(json::JsonOutput),
    }
}
