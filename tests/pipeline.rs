use std::fs;
use std::path::PathBuf;

use scaling_report::error::StatsError;
use scaling_report::grid::GridShape;
use scaling_report::log_parse;
use scaling_report::stats::ScalingSummary;

fn temp_log(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "scaling-report-{}-{}.log",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn scenario_log() -> String {
    // 4 process counts, 5 trials. Each block of four lines is one
    // trial sweep over process counts 1..4; the last sweep carries a
    // 100s outlier for the single-process run.
    let mut log = String::from("Running convex hull benchmark\n");
    for trial in 0..5 {
        let baseline = if trial == 4 { 100.0 } else { 10.0 };
        for elapsed in [baseline, 5.0, 4.0, 2.0] {
            log.push_str(&format!("Elapsed time: {:.6}\n", elapsed));
        }
        log.push('\n');
    }
    log
}

#[test]
fn full_pipeline_matches_expected_vectors() {
    let path = temp_log("scenario", &scenario_log());
    let shape = GridShape::new(4, 5).unwrap();
    let grid = log_parse::scan_file(&path, shape).unwrap();
    fs::remove_file(&path).ok();

    let summary = ScalingSummary::from_grid(&grid);
    assert_eq!(summary.mean, vec![10.0, 5.0, 4.0, 2.0]);
    assert_eq!(summary.speedup, vec![1.0, 2.0, 2.5, 5.0]);
    assert_eq!(summary.efficiency[0], 1.0);
    assert_eq!(summary.efficiency[1], 1.0);
    assert!((summary.efficiency[2] - 2.5 / 3.0).abs() < 1e-12);
    assert_eq!(summary.efficiency[3], 1.25);
}

#[test]
fn repeated_runs_are_deterministic() {
    let path = temp_log("determinism", &scenario_log());
    let shape = GridShape::new(4, 5).unwrap();

    let first = ScalingSummary::from_grid(&log_parse::scan_file(&path, shape).unwrap());
    let second = ScalingSummary::from_grid(&log_parse::scan_file(&path, shape).unwrap());
    fs::remove_file(&path).ok();

    assert_eq!(first.mean, second.mean);
    assert_eq!(first.speedup, second.speedup);
    assert_eq!(first.efficiency, second.efficiency);
}

#[test]
fn zero_procs_is_rejected_before_any_scan() {
    // A 0-row shape used to slip through and blow up on the missing
    // baseline row once an empty log "filled" its zero cells.
    assert!(matches!(GridShape::new(0, 5), Err(StatsError::NoProcs)));
}

#[test]
fn missing_file_is_a_file_access_error() {
    let shape = GridShape::new(4, 5).unwrap();
    let path = std::env::temp_dir().join("scaling-report-does-not-exist.log");
    assert!(matches!(
        log_parse::scan_file(&path, shape),
        Err(StatsError::FileAccess { .. })
    ));
}

#[test]
fn truncated_log_is_incomplete() {
    let mut log = scenario_log();
    let cut = log.rfind("Elapsed").unwrap();
    log.truncate(cut);

    let path = temp_log("truncated", &log);
    let shape = GridShape::new(4, 5).unwrap();
    let result = log_parse::scan_file(&path, shape);
    fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(StatsError::IncompleteData {
            found: 19,
            expected: 20
        })
    ));
}
