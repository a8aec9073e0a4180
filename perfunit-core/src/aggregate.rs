use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::model::{Outcome, RequestEvent};

/// Per-name latency and failure aggregate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestSummary {
    pub count: u64,
    pub failure_count: u64,
    pub total_elapsed_millis: i128,
    pub min_elapsed_secs: f64,
    pub max_elapsed_secs: f64,
}

impl Default for RequestSummary {
    fn default() -> Self {
        Self {
            count: 0,
            failure_count: 0,
            total_elapsed_millis: 0,
            min_elapsed_secs: f64::INFINITY,
            max_elapsed_secs: 0.0,
        }
    }
}

impl RequestSummary {
    pub fn push(&mut self, elapsed_millis: i64, outcome: Outcome) {
        self.count = self.count.saturating_add(1);
        if outcome.is_failure() {
            self.failure_count = self.failure_count.saturating_add(1);
        }

        let elapsed_secs = elapsed_millis as f64 / 1000.0;
        self.total_elapsed_millis += i128::from(elapsed_millis);
        self.min_elapsed_secs = self.min_elapsed_secs.min(elapsed_secs);
        self.max_elapsed_secs = self.max_elapsed_secs.max(elapsed_secs);
    }

    pub fn success_count(&self) -> u64 {
        self.count.saturating_sub(self.failure_count)
    }

    // A summary only exists once an event was pushed, so `count > 0`.
    // Summing whole milliseconds keeps the mean within `[min, max]`.
    pub fn mean_elapsed_secs(&self) -> f64 {
        self.total_elapsed_millis as f64 / self.count as f64 / 1000.0
    }

    pub fn success_rate_percent(&self) -> f64 {
        self.success_count() as f64 / self.count as f64 * 100.0
    }
}

/// Request summaries keyed by request name, iterated in ascending name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    by_name: BTreeMap<String, RequestSummary>,
}

impl Aggregates {
    /// Folds one event in. Names are used verbatim (case and whitespace matter).
    pub fn push(&mut self, event: &RequestEvent) {
        let elapsed = event.elapsed_millis();
        if let Some(summary) = self.by_name.get_mut(event.name.as_str()) {
            summary.push(elapsed, event.outcome);
            return;
        }
        self.by_name
            .entry(event.name.clone())
            .or_default()
            .push(elapsed, event.outcome);
    }

    pub fn get(&self, name: &str) -> Option<&RequestSummary> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, RequestSummary> {
        self.by_name.iter()
    }
}

impl<'a> IntoIterator for &'a Aggregates {
    type Item = (&'a String, &'a RequestSummary);
    type IntoIter = btree_map::Iter<'a, String, RequestSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a RequestEvent> for Aggregates {
    fn from_iter<I: IntoIterator<Item = &'a RequestEvent>>(iter: I) -> Self {
        let mut out = Self::default();
        for event in iter {
            out.push(event);
        }
        out
    }
}

/// Groups `events` by request name.
pub fn aggregate<'a>(events: impl IntoIterator<Item = &'a RequestEvent>) -> Aggregates {
    events.into_iter().collect()
}
