use crate::aggregate::RequestSummary;

pub const MAX_RESPONSE_TIME_MS: f64 = 5000.0;
pub const MIN_SUCCESS_RATE_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdOp {
    Lt,
    Gte,
}

impl ThresholdOp {
    pub fn holds(self, observed: f64, expected: f64) -> bool {
        match self {
            Self::Lt => observed < expected,
            Self::Gte => observed >= expected,
        }
    }
}

/// Fixed per-request assertions synthesized into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Assertion {
    /// Max latency must stay strictly below 5000 ms.
    #[strum(serialize = "Response_Time_Under_5000ms")]
    ResponseTime,

    /// Success rate must not drop below 90 %.
    #[strum(serialize = "Success_Rate_Above_90_Percent")]
    SuccessRate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    pub observed: f64,
    pub message: String,
}

impl Assertion {
    fn observed(self, summary: &RequestSummary) -> f64 {
        match self {
            Self::ResponseTime => summary.max_elapsed_secs * 1000.0,
            Self::SuccessRate => summary.success_rate_percent(),
        }
    }

    /// Condition under which the assertion fails.
    fn failing_when(self) -> (ThresholdOp, f64) {
        match self {
            Self::ResponseTime => (ThresholdOp::Gte, MAX_RESPONSE_TIME_MS),
            Self::SuccessRate => (ThresholdOp::Lt, MIN_SUCCESS_RATE_PERCENT),
        }
    }

    pub fn evaluate(self, summary: &RequestSummary) -> Option<AssertionFailure> {
        let observed = self.observed(summary);
        let (op, limit) = self.failing_when();
        if !op.holds(observed, limit) {
            return None;
        }

        let message = match self {
            Self::ResponseTime => format!(
                "Max response time {}ms exceeds 5000ms threshold",
                truncate_ms(summary.max_elapsed_secs)
            ),
            Self::SuccessRate => {
                format!("Success rate {observed:.1}% is below 90% threshold")
            }
        };
        Some(AssertionFailure { observed, message })
    }
}

/// Seconds to whole milliseconds, truncating toward zero.
pub fn truncate_ms(secs: f64) -> i64 {
    (secs * 1000.0) as i64
}
