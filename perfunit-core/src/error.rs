use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("results directory not found: {}", .0.display())]
    ResultsDirNotFound(PathBuf),

    #[error("no run directory starting with `{prefix}` in {}", dir.display())]
    NoRunDirectory { dir: PathBuf, prefix: String },

    #[error("`{file}` not found in {}", dir.display())]
    LogFileNotFound { dir: PathBuf, file: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: perfunit_xml::Error,
    },
}

impl Error {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ResultsDirNotFound(_) | Self::NoRunDirectory { .. } | Self::LogFileNotFound { .. }
        )
    }
}
