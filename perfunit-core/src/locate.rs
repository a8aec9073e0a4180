use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::RunLayout;
use crate::{Error, Result};

/// Finds the log of the most recent run under `layout.results_dir`.
///
/// Run directory names embed a sortable timestamp, so the lexicographically
/// greatest matching name is the latest run.
pub fn locate_latest_log(layout: &RunLayout) -> Result<PathBuf> {
    let root = &layout.results_dir;
    let entries = match fs::read_dir(root) {
        Ok(v) => v,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::ResultsDirNotFound(root.clone()));
        }
        Err(source) => {
            return Err(Error::Io {
                path: root.clone(),
                source,
            });
        }
    };

    let mut latest: Option<(String, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: root.clone(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !name.starts_with(&layout.run_prefix) {
            continue;
        }
        if latest.as_ref().is_none_or(|(best, _)| name > *best) {
            latest = Some((name, path));
        }
    }

    let Some((_, run_dir)) = latest else {
        return Err(Error::NoRunDirectory {
            dir: root.clone(),
            prefix: layout.run_prefix.clone(),
        });
    };

    let log = run_dir.join(&layout.log_name);
    if !log.is_file() {
        return Err(Error::LogFileNotFound {
            dir: run_dir,
            file: layout.log_name.clone(),
        });
    }

    tracing::info!(log = %log.display(), "located latest simulation log");
    Ok(log)
}
