use std::path::PathBuf;

pub const DEFAULT_RESULTS_DIR: &str = "build/reports/gatling";
pub const DEFAULT_RUN_PREFIX: &str = "javaapitestsimulation";
pub const DEFAULT_LOG_NAME: &str = "simulation.log";
pub const DEFAULT_OUTPUT_DIR: &str = "build/gatling/junit";
pub const DEFAULT_OUTPUT_FILE: &str = "TEST-JavaApiTestSimulation.xml";

/// Where run directories live and how the latest one is recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    pub results_dir: PathBuf,

    /// Case-sensitive prefix of run directory names.
    pub run_prefix: String,

    /// Log file name inside a run directory.
    pub log_name: String,
}

impl Default for RunLayout {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            run_prefix: DEFAULT_RUN_PREFIX.to_string(),
            log_name: DEFAULT_LOG_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub layout: RunLayout,

    /// Read this log directly instead of locating the latest run.
    pub log_file: Option<PathBuf>,

    pub output_dir: PathBuf,
    pub output_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            layout: RunLayout::default(),
            log_file: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}
