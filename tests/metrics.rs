use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wear_metrics::report::render_text;
use wear_metrics::{analyze_file, ExtremaPolicy, ReducerConfig, WearError};

fn write_log(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("disk.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reports_rates_and_savings_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_log(
        &dir,
        "seconds_elapsed,size_logged,sectors_written\n\
         10,1000,100\n\
         20,3000,150\n",
    );

    let result = analyze_file(&path, ReducerConfig::default()).unwrap();
    assert_eq!(
        render_text(&result),
        "log_rate:                  150.00 B/s\n\
         wear_rate:                 1280.00 B/s\n\
         savings:                   -753.33 %\n"
    );
}

#[test]
fn positive_savings_when_device_writes_less_than_logged() {
    let dir = tempfile::tempdir().unwrap();
    // 4 MiB logged over 8s, 2048 sectors (1 MiB) reached the device.
    let path = write_log(
        &dir,
        "timestamp,seconds_elapsed,size_logged,sectors_written\n\
         2024-01-01T00:00:00Z,0,0,5000\n\
         2024-01-01T00:00:04Z,4,2097152,6024\n\
         2024-01-01T00:00:08Z,8,4194304,7048\n",
    );

    let result = analyze_file(&path, ReducerConfig::default()).unwrap();
    assert_eq!(result.log_rate(), 524_288.0);
    assert_eq!(result.wear_rate(), 131_072.0);
    assert_eq!(result.savings(), 0.75);
    assert_eq!(
        render_text(&result),
        "log_rate:                  524288.00 B/s\n\
         wear_rate:                 131072.00 B/s\n\
         savings:                   75.00 %\n"
    );
}

#[test]
fn decreasing_counter_depends_on_extrema_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_log(
        &dir,
        "seconds_elapsed,size_logged,sectors_written\n\
         10,500,200\n\
         20,800,100\n",
    );

    let reference = analyze_file(&path, ReducerConfig::default()).unwrap();
    assert_eq!(reference.sectors_written(), 0.0);
    assert_eq!(reference.wear_rate(), 0.0);

    let independent = analyze_file(
        &path,
        ReducerConfig {
            extrema: ExtremaPolicy::Independent,
        },
    )
    .unwrap();
    assert_eq!(independent.sectors_written(), 100.0);
    assert_eq!(independent.wear_rate(), 2_560.0);
}

#[test]
fn header_only_log_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_log(&dir, "seconds_elapsed,size_logged,sectors_written\n");
    let err = analyze_file(&path, ReducerConfig::default()).unwrap_err();
    assert!(matches!(err, WearError::EmptyInput));
}

#[test]
fn zero_elapsed_time_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_log(&dir, "seconds_elapsed,size_logged,sectors_written\n0,100,10\n");
    let err = analyze_file(&path, ReducerConfig::default()).unwrap_err();
    assert!(matches!(err, WearError::ZeroElapsedTime));
}

#[test]
fn malformed_row_names_its_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_log(
        &dir,
        "seconds_elapsed,size_logged,sectors_written\n\
         1,100,10\n\
         2,200,20\n\
         3,300,n/a\n",
    );
    let err = analyze_file(&path, ReducerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("row 3"), "{err}");
    assert!(matches!(err, WearError::MalformedRecord { row: 3, .. }));
}

#[test]
fn missing_input_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = analyze_file(dir.path().join("nope.csv"), ReducerConfig::default()).unwrap_err();
    assert!(matches!(err, WearError::InputNotFound { .. }));
}

#[test]
fn directory_input_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = analyze_file(dir.path(), ReducerConfig::default()).unwrap_err();
    assert!(matches!(err, WearError::InputUnreadable { .. }), "{err:?}");
}
