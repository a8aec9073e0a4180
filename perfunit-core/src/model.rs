use chrono::{Local, NaiveDateTime, TimeZone as _};

pub const UNKNOWN_SIMULATION: &str = "UnknownSimulation";

/// Identifies one test execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMetadata {
    pub simulation_name: Option<String>,
    pub start_time_millis: Option<i64>,

    /// Running maximum of request end times.
    pub end_time_millis: Option<i64>,
}

impl RunMetadata {
    /// Simulation name, or a fixed placeholder when no `RUN` record set one.
    pub fn simulation_name(&self) -> &str {
        self.simulation_name.as_deref().unwrap_or(UNKNOWN_SIMULATION)
    }

    pub fn observe_end(&mut self, end_millis: i64) {
        self.end_time_millis = Some(
            self.end_time_millis
                .map_or(end_millis, |prev| prev.max(end_millis)),
        );
    }

    /// `(end - start) / 1000`, present only when both bounds are known.
    pub fn duration_secs(&self) -> Option<f64> {
        let start = self.start_time_millis?;
        let end = self.end_time_millis?;
        Some(end.saturating_sub(start) as f64 / 1000.0)
    }

    /// Run start in the local timezone, without offset.
    pub fn start_local(&self) -> Option<NaiveDateTime> {
        let millis = self.start_time_millis?;
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.naive_local())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub const SUCCESS_TOKEN: &'static str = "OK";

    /// Exact match against `OK`; everything else (including empty) is a failure.
    pub fn from_status(token: &str) -> Self {
        if token == Self::SUCCESS_TOKEN {
            Self::Success
        } else {
            Self::Failure
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }
}

/// One observed request completion.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEvent {
    pub name: String,
    pub start_millis: i64,
    pub end_millis: i64,
    pub outcome: Outcome,
}

impl RequestEvent {
    /// May be negative when the producer wrote `end < start`.
    pub fn elapsed_millis(&self) -> i64 {
        self.end_millis.saturating_sub(self.start_millis)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_millis() as f64 / 1000.0
    }
}

/// Request counters across all names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTotals {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
}

impl RequestTotals {
    pub fn record(&mut self, outcome: Outcome) {
        self.total = self.total.saturating_add(1);
        match outcome {
            Outcome::Success => self.successful = self.successful.saturating_add(1),
            Outcome::Failure => self.failed = self.failed.saturating_add(1),
        }
    }

    pub fn success_rate_percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.successful as f64 / self.total as f64 * 100.0)
    }
}
