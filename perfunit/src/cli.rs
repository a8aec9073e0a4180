use clap::Parser;
use std::path::PathBuf;

use perfunit_core::config::{
    DEFAULT_LOG_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_RESULTS_DIR,
    DEFAULT_RUN_PREFIX,
};
use perfunit_core::{ReportConfig, RunLayout};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    HumanReadable,
    /// Emit a single JSON summary line to stdout.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "perfunit",
    author,
    version,
    about = "Convert a Gatling simulation.log into a JUnit XML report",
    long_about = "perfunit reads the simulation.log of the most recent Gatling run, aggregates request latencies per request name and writes a JUnit XML report.\n\nEach request name becomes three test cases: a performance case with latency figures, a max-response-time assertion (< 5000ms) and a success-rate assertion (>= 90%).\n\nThe exit code only reflects whether the report could be produced; assertion failures live inside the XML.",
    after_help = "Examples:\n  perfunit\n  perfunit --results-dir target/gatling --output-dir target/gatling/junit\n  perfunit --log-file runs/simulation.log --output json"
)]
pub struct Cli {
    /// Directory containing timestamped run directories
    #[arg(long, env = "PERFUNIT_RESULTS_DIR", default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Prefix of run directory names (case-sensitive)
    #[arg(long, env = "PERFUNIT_RUN_PREFIX", default_value = DEFAULT_RUN_PREFIX)]
    pub run_prefix: String,

    /// Log file name inside a run directory
    #[arg(long, env = "PERFUNIT_LOG_NAME", default_value = DEFAULT_LOG_NAME)]
    pub log_name: String,

    /// Read this log directly instead of locating the latest run
    #[arg(long, env = "PERFUNIT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Directory the report is written to (created if missing)
    #[arg(long, env = "PERFUNIT_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Report file name
    #[arg(long, env = "PERFUNIT_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::HumanReadable)]
    pub output: OutputFormat,
}

impl Cli {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            layout: RunLayout {
                results_dir: self.results_dir.clone(),
                run_prefix: self.run_prefix.clone(),
                log_name: self.log_name.clone(),
            },
            log_file: self.log_file.clone(),
            output_dir: self.output_dir.clone(),
            output_file: self.output_file.clone(),
        }
    }
}
