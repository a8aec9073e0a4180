use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::aggregate::Aggregates;
use crate::model::{RequestTotals, RunMetadata};
use crate::record::{Record, parse_record};
use crate::{Error, Result};

/// Everything the report needs from one simulation log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRun {
    pub metadata: RunMetadata,
    pub requests: Aggregates,
    pub totals: RequestTotals,

    /// `RUN`/`REQUEST` lines that were dropped as malformed.
    pub skipped_records: u64,
}

impl ParsedRun {
    /// Folds one decoded record in.
    pub fn apply(&mut self, record: Record) {
        match record {
            Record::Run(run) => {
                if self.metadata.simulation_name.is_some() {
                    tracing::debug!(
                        simulation = %run.simulation_name,
                        "ignoring additional RUN record"
                    );
                    return;
                }
                self.metadata.simulation_name = Some(run.simulation_name);
                self.metadata.start_time_millis = Some(run.start_time_millis);
            }
            Record::Request(event) => {
                self.metadata.observe_end(event.end_millis);
                self.totals.record(event.outcome);
                self.requests.push(&event);
            }
        }
    }
}

/// Opens and parses the simulation log at `path`.
pub fn parse_log_file(path: &Path) -> Result<ParsedRun> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_log(BufReader::new(file), path)
}

/// Streams `reader` line by line, folding request events into per-name
/// aggregates as they are read. `source` is only used for diagnostics.
pub fn parse_log<R: BufRead>(mut reader: R, source: &Path) -> Result<ParsedRun> {
    let mut run = ParsedRun::default();
    let mut buf = Vec::new();
    let mut line_no = 0u64;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|err| Error::Io {
            path: source.to_path_buf(),
            source: err,
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        match parse_record(&line) {
            Ok(Some(record)) => run.apply(record),
            Ok(None) => tracing::debug!(line = line_no, "ignoring non-record line"),
            Err(err) => {
                run.skipped_records += 1;
                tracing::warn!(
                    file = %source.display(),
                    line = line_no,
                    "skipping malformed record: {err}"
                );
            }
        }
    }

    tracing::info!(
        file = %source.display(),
        lines = line_no,
        requests = run.totals.total,
        groups = run.requests.len(),
        skipped = run.skipped_records,
        "parsed simulation log"
    );

    Ok(run)
}
