use crate::cli::Cli;
use crate::output;
use crate::run_error::RunError;

pub fn run(cli: &Cli) -> Result<(), RunError> {
    let out = output::formatter(cli.output);
    let config = cli.report_config();

    let outcome = perfunit_core::generate_report(&config)?;

    out.print_summary(&outcome).map_err(RunError::RuntimeError)
}
