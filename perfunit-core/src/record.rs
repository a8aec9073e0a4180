//! Single-line decoding of the tab-separated simulation log.
//!
//! Field layout (1-based):
//!
//! ```text
//! RUN      <simulation>  <ignored>  <start_ms>  ...
//! REQUEST  <ignored>     <name>     <start_ms>  <end_ms>  <status>
//! ```

use std::str::FromStr as _;

use crate::model::{Outcome, RequestEvent};

pub const FIELD_SEPARATOR: char = '\t';

/// Lines with fewer fields than this are not records at all.
const MIN_FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
pub enum RecordKind {
    #[strum(serialize = "RUN")]
    Run,

    #[strum(serialize = "REQUEST")]
    Request,
}

impl RecordKind {
    pub fn min_fields(self) -> usize {
        match self {
            Self::Run => 4,
            Self::Request => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub simulation_name: String,
    pub start_time_millis: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Run(RunRecord),
    Request(RequestEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    #[error("{kind} record has {found} fields, expected at least {expected}")]
    TooFewFields {
        kind: RecordKind,
        found: usize,
        expected: usize,
    },

    #[error("{kind} record field {field} is not an integer timestamp: `{value}`")]
    InvalidTimestamp {
        kind: RecordKind,
        field: usize,
        value: String,
    },
}

/// Decodes one log line.
///
/// Returns `Ok(None)` for lines that are not records this parser understands
/// (short lines, unknown kinds) and `Err` for `RUN`/`REQUEST` lines that are
/// incomplete or carry a non-numeric timestamp.
pub fn parse_record(line: &str) -> Result<Option<Record>, MalformedRecord> {
    let line = line.trim_end_matches(['\n', '\r']);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Ok(None);
    }

    let Some(kind) = fields.first().and_then(|k| RecordKind::from_str(k).ok()) else {
        return Ok(None);
    };

    if fields.len() < kind.min_fields() {
        return Err(MalformedRecord::TooFewFields {
            kind,
            found: fields.len(),
            expected: kind.min_fields(),
        });
    }

    let field = |n: usize| fields.get(n - 1).copied().unwrap_or_default();

    match kind {
        RecordKind::Run => Ok(Some(Record::Run(RunRecord {
            simulation_name: field(2).to_string(),
            start_time_millis: parse_millis(kind, 4, field(4))?,
        }))),
        RecordKind::Request => Ok(Some(Record::Request(RequestEvent {
            name: field(3).to_string(),
            start_millis: parse_millis(kind, 4, field(4))?,
            end_millis: parse_millis(kind, 5, field(5))?,
            outcome: Outcome::from_status(field(6)),
        }))),
    }
}

fn parse_millis(kind: RecordKind, field: usize, raw: &str) -> Result<i64, MalformedRecord> {
    raw.trim()
        .parse()
        .map_err(|_| MalformedRecord::InvalidTimestamp {
            kind,
            field,
            value: raw.to_string(),
        })
}
