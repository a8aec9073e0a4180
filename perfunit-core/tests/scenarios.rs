use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;
use perfunit_core::{
    ParsedRun, ReportConfig, RunLayout, TestSuite, build_report, generate_report, parse_log,
};

fn parse(log: &str) -> anyhow::Result<ParsedRun> {
    parse_log(Cursor::new(log), Path::new("simulation.log")).context("parse log")
}

fn failure_message(suite: &TestSuite, case: &str) -> Option<String> {
    suite
        .cases
        .iter()
        .find(|c| c.name == case)
        .and_then(|c| c.failure.as_ref())
        .map(|f| f.message.clone())
}

#[test]
fn scenario_a_slow_and_failing_requests() -> anyhow::Result<()> {
    let run = parse(
        "RUN\tLoad\tload\t1000\tdesc\t3.11.5\n\
         REQUEST\t\tPing\t1000\t1100\tOK\n\
         REQUEST\t\tPing\t1100\t1300\tOK\n\
         REQUEST\t\tPing\t1300\t10300\tKO\n",
    )?;

    let Some(ping) = run.requests.get("Ping") else {
        anyhow::bail!("missing Ping group");
    };
    anyhow::ensure!(ping.count == 3 && ping.failure_count == 1);
    anyhow::ensure!(ping.max_elapsed_secs == 9.0);

    let suite = build_report(&run);
    anyhow::ensure!(suite.tests() == 3);
    anyhow::ensure!(suite.failures() == 2);
    anyhow::ensure!(
        failure_message(&suite, "Ping_Response_Time_Under_5000ms").as_deref()
            == Some("Max response time 9000ms exceeds 5000ms threshold")
    );
    anyhow::ensure!(
        failure_message(&suite, "Ping_Success_Rate_Above_90_Percent").as_deref()
            == Some("Success rate 66.7% is below 90% threshold")
    );
    anyhow::ensure!(failure_message(&suite, "Ping_Performance_Test").is_none());
    Ok(())
}

#[test]
fn scenario_b_run_without_requests() -> anyhow::Result<()> {
    let run = parse("RUN\tLoad\tload\t1000\tdesc\t3.11.5\n")?;
    let suite = build_report(&run);

    anyhow::ensure!(run.requests.is_empty());
    anyhow::ensure!(suite.tests() == 0 && suite.failures() == 0);
    anyhow::ensure!(suite.time_secs == 0.0);

    let el = suite.to_element();
    anyhow::ensure!(el.get_attr("tests") == Some("0"));
    anyhow::ensure!(el.get_attr("time") == Some("0.000"));
    anyhow::ensure!(el.count_descendants("testcase") == 0);
    Ok(())
}

#[test]
fn scenario_c_two_field_line_is_skipped() -> anyhow::Result<()> {
    let run = parse(
        "RUN\tLoad\tload\t1000\n\
         garbage\tline\n\
         REQUEST\t\tPing\t1000\t1010\tOK\n",
    )?;

    anyhow::ensure!(run.skipped_records == 0);
    anyhow::ensure!(run.totals.total == 1);
    anyhow::ensure!(build_report(&run).tests() == 3);
    Ok(())
}

#[test]
fn scenario_d_identical_names_share_a_group() -> anyhow::Result<()> {
    let run = parse(
        "RUN\tLoad\tload\t0\n\
         REQUEST\t\tLogin\t0\t50\tOK\n\
         REQUEST\t\tLogin\t100\t5099\tOK\n",
    )?;

    anyhow::ensure!(run.requests.len() == 1);
    let Some(login) = run.requests.get("Login") else {
        anyhow::bail!("missing Login group");
    };
    anyhow::ensure!(login.max_elapsed_secs == 4.999);

    let suite = build_report(&run);
    anyhow::ensure!(suite.failures() == 0);
    Ok(())
}

#[test]
fn test_count_is_three_per_distinct_name() -> anyhow::Result<()> {
    let mut log = String::from("RUN\tLoad\tload\t0\n");
    for i in 0..25 {
        log.push_str(&format!("REQUEST\t\tname-{}\t{i}\t{}\tOK\n", i % 7, i * 3));
    }

    let run = parse(&log)?;
    let suite = build_report(&run);
    anyhow::ensure!(run.requests.len() == 7);
    anyhow::ensure!(suite.tests() == 3 * run.requests.len());
    anyhow::ensure!(suite.to_element().count_descendants("testcase") == suite.tests());
    Ok(())
}

fn write_fixture(root: &Path) -> anyhow::Result<()> {
    let run_dir = root.join("results/javaapitestsimulation-20250922212356789");
    fs::create_dir_all(&run_dir)?;
    fs::write(
        run_dir.join("simulation.log"),
        "RUN\tsimulations.JavaApiTestSimulation\tjavaapitestsimulation\t1758575836567\tPerformance Test Execution\t3.11.5\n\
         USER\tJava API Test\tSTART\t1758575837500\n\
         REQUEST\t\tHealth Check\t1758575837624\t1758575837633\tOK\n\
         REQUEST\t\tGet Users\t1758575837640\t1758575837702\tOK\n\
         REQUEST\t\tGet Users\t1758575837710\t1758575837790\tKO\tstatus.find.in(200), but actually found 500\n\
         REQUEST\t\tCreate User\t1758575837800\t1758575837911\tOK\n",
    )?;
    Ok(())
}

fn config_for(root: &Path) -> ReportConfig {
    ReportConfig {
        layout: RunLayout {
            results_dir: root.join("results"),
            ..RunLayout::default()
        },
        output_dir: root.join("out/junit"),
        ..ReportConfig::default()
    }
}

#[test]
fn pipeline_writes_report_and_is_idempotent() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    write_fixture(tmp.path())?;
    let config = config_for(tmp.path());

    let first = generate_report(&config)?;
    let first_bytes = fs::read(&first.report_path)?;
    let second = generate_report(&config)?;
    let second_bytes = fs::read(&second.report_path)?;

    anyhow::ensure!(first_bytes == second_bytes, "report is not reproducible");
    anyhow::ensure!(first.report_path.ends_with("out/junit/TEST-JavaApiTestSimulation.xml"));
    anyhow::ensure!(first.simulation_name == "simulations.JavaApiTestSimulation");
    anyhow::ensure!(first.totals.total == 4 && first.totals.failed == 1);
    anyhow::ensure!(first.tests == 9);
    anyhow::ensure!(first.failures == 1);

    let xml = String::from_utf8(first_bytes)?;
    anyhow::ensure!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    anyhow::ensure!(xml.contains("name=\"Get Users_Success_Rate_Above_90_Percent\""));
    anyhow::ensure!(xml.contains("<property name=\"total_requests\" value=\"4\"/>"));
    anyhow::ensure!(xml.contains("<property name=\"test_duration_seconds\" value=\"1.344\"/>"));
    anyhow::ensure!(xml.contains("<property name=\"requests_per_second\" value=\"2.98\"/>"));
    anyhow::ensure!(xml.contains("hostname=\"localhost\" package=\"simulations\""));
    Ok(())
}

#[test]
fn explicit_log_file_bypasses_locator() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let log = tmp.path().join("custom.log");
    fs::write(&log, "RUN\tLoad\tload\t0\nREQUEST\t\tPing\t0\t10\tOK\n")?;

    let config = ReportConfig {
        layout: RunLayout {
            results_dir: tmp.path().join("does-not-exist"),
            ..RunLayout::default()
        },
        log_file: Some(log.clone()),
        output_dir: tmp.path().join("junit"),
        ..ReportConfig::default()
    };

    let outcome = generate_report(&config)?;
    anyhow::ensure!(outcome.log_path == log);
    anyhow::ensure!(outcome.tests == 3 && outcome.failures == 0);
    Ok(())
}

#[test]
fn missing_results_dir_is_not_found() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let config = config_for(tmp.path());

    match generate_report(&config) {
        Ok(_) => anyhow::bail!("expected missing results dir to fail"),
        Err(err) => anyhow::ensure!(err.is_not_found(), "unexpected error: {err}"),
    }
    anyhow::ensure!(!config.output_path().exists());
    Ok(())
}
