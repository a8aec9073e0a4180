//! Maps request aggregates onto a JUnit `testsuite` document.
//!
//! Every request name yields three cases: a performance case carrying the
//! latency figures, and one case per [`Assertion`], which fails when the
//! aggregate crosses the fixed threshold.

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDateTime;
use perfunit_xml::Element;
use strum::IntoEnumIterator as _;

use crate::aggregate::RequestSummary;
use crate::parse::ParsedRun;
use crate::thresholds::{
    Assertion, MAX_RESPONSE_TIME_MS, MIN_SUCCESS_RATE_PERCENT, truncate_ms,
};
use crate::{Error, Result};

pub const HOSTNAME: &str = "localhost";
pub const PACKAGE: &str = "simulations";
pub const FAILURE_TYPE: &str = "AssertionError";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub value: String,
}

impl Property {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub classname: String,
    pub name: String,
    pub time_secs: f64,
    pub properties: Vec<Property>,
    pub system_out: Option<String>,
    pub failure: Option<Failure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestSuite {
    pub name: String,
    pub time_secs: f64,
    pub timestamp: Option<NaiveDateTime>,
    pub properties: Vec<Property>,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn tests(&self) -> usize {
        self.cases.len()
    }

    /// Failure markers actually attached, across all cases.
    pub fn failures(&self) -> usize {
        self.cases.iter().filter(|c| c.failure.is_some()).count()
    }

    pub fn to_element(&self) -> Element {
        Element::new("testsuite")
            .attr("name", &self.name)
            .attr("tests", self.tests().to_string())
            .attr("failures", self.failures().to_string())
            .attr("errors", "0")
            .attr("skipped", "0")
            .attr("time", format_secs(self.time_secs))
            .attr_opt(
                "timestamp",
                self.timestamp
                    .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            )
            .attr("hostname", HOSTNAME)
            .attr("package", PACKAGE)
            .child(properties_element(&self.properties))
            .children(self.cases.iter().map(TestCase::to_element))
    }
}

impl TestCase {
    pub fn to_element(&self) -> Element {
        let mut el = Element::new("testcase")
            .attr("classname", &self.classname)
            .attr("name", &self.name)
            .attr("time", format_secs(self.time_secs));

        if !self.properties.is_empty() {
            el = el.child(properties_element(&self.properties));
        }
        if let Some(out) = &self.system_out {
            el = el.child(Element::new("system-out").text(out));
        }
        if let Some(f) = &self.failure {
            el = el.child(
                Element::new("failure")
                    .attr("message", &f.message)
                    .attr("type", f.kind),
            );
        }
        el
    }
}

fn properties_element(props: &[Property]) -> Element {
    Element::new("properties").children(props.iter().map(|p| {
        Element::new("property")
            .attr("name", p.name)
            .attr("value", &p.value)
    }))
}

fn format_secs(secs: f64) -> String {
    format!("{secs:.3}")
}

fn format_percent(pct: f64) -> String {
    format!("{pct:.1}")
}

/// Builds the suite for one parsed run. Pure: no I/O.
pub fn build_report(run: &ParsedRun) -> TestSuite {
    let classname = run.metadata.simulation_name();
    let duration = run.metadata.duration_secs().unwrap_or(0.0);

    let mut cases = Vec::with_capacity(run.requests.len() * 3);
    for (name, summary) in &run.requests {
        cases.push(performance_case(classname, name, summary));
        cases.extend(Assertion::iter().map(|a| assertion_case(classname, name, summary, a)));
    }

    let requests_per_second = if duration > 0.0 {
        format!("{:.2}", run.totals.total as f64 / duration)
    } else {
        "0".to_string()
    };

    TestSuite {
        name: classname.to_string(),
        time_secs: duration,
        timestamp: run.metadata.start_local(),
        properties: vec![
            Property::new("total_requests", run.totals.total),
            Property::new("test_duration_seconds", format_secs(duration)),
            Property::new("requests_per_second", requests_per_second),
        ],
        cases,
    }
}

fn performance_case(classname: &str, name: &str, s: &RequestSummary) -> TestCase {
    let min_ms = truncate_ms(s.min_elapsed_secs);
    let max_ms = truncate_ms(s.max_elapsed_secs);
    let avg_ms = truncate_ms(s.mean_elapsed_secs());
    let rate = s.success_rate_percent();

    let verdict = |pass: bool| if pass { "PASS" } else { "FAIL" };
    let latency_ok = s.max_elapsed_secs * 1000.0 < MAX_RESPONSE_TIME_MS;
    let rate_ok = rate > MIN_SUCCESS_RATE_PERCENT;

    let mut out = String::new();
    writeln!(out, "=== Performance Test Results for {name} ===").ok();
    writeln!(out, "Total Requests: {}", s.count).ok();
    writeln!(out, "Successful Requests: {}", s.success_count()).ok();
    writeln!(out, "Failed Requests: {}", s.failure_count).ok();
    writeln!(out, "Success Rate: {rate:.1}%").ok();
    writeln!(out, "Response Times (ms):").ok();
    writeln!(out, "  Min: {min_ms}").ok();
    writeln!(out, "  Max: {max_ms}").ok();
    writeln!(out, "  Average: {avg_ms}").ok();
    writeln!(out, "Performance Assertions:").ok();
    writeln!(out, "  Max Response Time < 5000ms: {}", verdict(latency_ok)).ok();
    write!(out, "  Success Rate > 90%: {}", verdict(rate_ok)).ok();

    TestCase {
        classname: classname.to_string(),
        name: format!("{name}_Performance_Test"),
        time_secs: s.mean_elapsed_secs(),
        properties: vec![
            Property::new("request_count", s.count),
            Property::new("min_response_time_ms", min_ms),
            Property::new("max_response_time_ms", max_ms),
            Property::new("avg_response_time_ms", avg_ms),
            Property::new("success_rate_percent", format_percent(rate)),
        ],
        system_out: Some(out),
        failure: None,
    }
}

fn assertion_case(
    classname: &str,
    name: &str,
    summary: &RequestSummary,
    assertion: Assertion,
) -> TestCase {
    TestCase {
        classname: classname.to_string(),
        name: format!("{name}_{assertion}"),
        time_secs: 0.0,
        properties: Vec::new(),
        system_out: None,
        failure: assertion.evaluate(summary).map(|f| {
            tracing::debug!(
                request = name,
                assertion = %assertion,
                observed = f.observed,
                "assertion failed"
            );
            Failure {
                message: f.message,
                kind: FAILURE_TYPE,
            }
        }),
    }
}

/// Renders `suite` and writes it to `path`, creating parent directories.
pub fn write_report(path: &Path, suite: &TestSuite) -> Result<()> {
    perfunit_xml::write_document(path, &suite.to_element()).map_err(|source| {
        Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(
        path = %path.display(),
        tests = suite.tests(),
        failures = suite.failures(),
        "wrote junit report"
    );
    Ok(())
}
