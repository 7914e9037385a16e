//! End-to-end tests for the timeline binary

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_timeline"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("TIMELINE_SEED")
        .output()
        .expect("failed to run timeline binary")
}

fn parse_times(output: &Output) -> Vec<f64> {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let line = stdout.trim_end();
    assert_eq!(stdout.lines().count(), 1, "expected a single line: {:?}", stdout);
    line.split(',').map(|v| v.parse::<f64>().unwrap()).collect()
}

fn assert_six_decimals(output: &Output) {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    for value in stdout.trim_end().split(',') {
        let (_, frac) = value.split_once('.').expect("missing decimal point");
        assert_eq!(frac.len(), 6, "value {} is not fixed-point with 6 digits", value);
    }
}

#[test]
fn test_every_distribution_prints_requested_count() {
    for name in ["poisson", "uniform", "gamma", "normal"] {
        for n in [1usize, 2, 7, 50] {
            let output = run(&[name, "60", &n.to_string()]);
            assert!(output.status.success(), "{} {} failed", name, n);
            assert_eq!(parse_times(&output).len(), n, "{} {}", name, n);
            assert_six_decimals(&output);
        }
    }
}

#[test]
fn test_bimodal_lengths_even_and_odd() {
    for (n, expected) in [(2usize, 2usize), (10, 10), (3, 4), (5, 4), (7, 8), (9, 8)] {
        let output = run(&["bimodal", "60", &n.to_string()]);
        assert!(output.status.success());
        assert_eq!(parse_times(&output).len(), expected, "n = {}", n);
    }
}

#[test]
fn test_rescaled_distributions_end_at_duration() {
    for name in ["poisson", "gamma", "normal", "bimodal"] {
        let output = run(&[name, "10", "40"]);
        let times = parse_times(&output);
        let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((max - 10.0).abs() < 1e-6, "{} max = {}", name, max);
        assert!(times.iter().all(|&t| t >= 0.0), "{} below start", name);
    }
}

#[test]
fn test_normal_and_bimodal_start_at_zero() {
    for name in ["normal", "bimodal"] {
        let times = parse_times(&run(&[name, "30", "20"]));
        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        assert!(min.abs() < 1e-6, "{} min = {}", name, min);
    }
}

#[test]
fn test_uniform_within_window() {
    let times = parse_times(&run(&["uniform", "15", "500"]));
    assert!(times.iter().all(|&t| (0.0..=15.0).contains(&t)));
}

#[test]
fn test_poisson_is_non_decreasing_and_ends_at_duration() {
    let output = run(&["poisson", "10", "5"]);
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.trim_end().ends_with(",10.000000"), "{}", stdout);

    let times = parse_times(&output);
    assert_eq!(times.len(), 5);
    assert!(times.windows(2).all(|p| p[0] <= p[1]));
}

#[test]
fn test_output_is_deterministic() {
    for name in ["poisson", "uniform", "gamma", "normal", "bimodal"] {
        let a = run(&[name, "60", "25"]);
        let b = run(&[name, "60", "25"]);
        assert_eq!(a.stdout, b.stdout, "{} differs between runs", name);
    }
}

#[test]
fn test_seed_changes_output() {
    let a = run(&["uniform", "60", "10"]);
    let b = run(&["uniform", "60", "10", "--seed", "1"]);
    assert_ne!(a.stdout, b.stdout);
}

#[test]
fn test_unknown_distribution_exits_with_one() {
    let output = run(&["exponential", "60", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown distribution: exponential"), "{}", stderr);
}

#[test]
fn test_distribution_name_is_case_sensitive() {
    let output = run(&["Poisson", "60", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_duration_exits_with_one() {
    let output = run(&["uniform", "0", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_start_offset_shifts_window() {
    let times = parse_times(&run(&["normal", "60", "30", "--start", "100"]));
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!((min - 100.0).abs() < 1e-6);
    assert!((max - 160.0).abs() < 1e-6);
}

#[test]
fn test_lines_format() {
    let output = run(&["gamma", "60", "12", "--format", "lines"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 12);
}

#[test]
fn test_json_format() {
    let output = run(&["bimodal", "60", "5", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for key in ["distribution", "seed", "start", "end", "instances", "count", "sorted", "times"] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(value["distribution"]["kind"], "bimodal");
    assert_eq!(value["instances"], 5);
    assert_eq!(value["count"], 4);
    assert_eq!(value["seed"], 123456789);
    assert_eq!(value["start"], 0.0);
    assert_eq!(value["end"], 60.0);
    assert_eq!(value["times"].as_array().unwrap().len(), 4);
}

#[test]
fn test_sorted_flag() {
    let times = parse_times(&run(&["uniform", "60", "100", "--sorted"]));
    assert!(times.windows(2).all(|p| p[0] <= p[1]));
}

#[test]
fn test_summary_goes_to_stderr() {
    let plain = run(&["poisson", "60", "30"]);
    let with_summary = run(&["poisson", "60", "30", "--summary"]);
    assert_eq!(plain.stdout, with_summary.stdout);

    let stderr = String::from_utf8(with_summary.stderr).unwrap();
    assert!(stderr.contains("Timeline Summary:"), "{}", stderr);
    assert!(stderr.contains("Arrivals:     30"), "{}", stderr);
    assert!(stderr.contains("First/last:"), "{}", stderr);
}

#[test]
fn test_summary_first_last_follow_print_order() {
    let output = run(&["normal", "60", "20", "--summary"]);
    let times = parse_times(&output);
    let stderr = String::from_utf8(output.stderr).unwrap();
    let expected = format!(
        "First/last:   {:.6} / {:.6}",
        times[0],
        times[times.len() - 1]
    );
    assert!(stderr.contains(&expected), "{}", stderr);
}

#[test]
fn test_negative_t0_exits_with_one() {
    let output = run(&["poisson", "60", "10", "--t0=-5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("t0"), "{}", stderr);
}

#[test]
fn test_oversized_instance_count_exits_with_one() {
    for name in ["uniform", "bimodal"] {
        let output = run(&[name, "60", "18446744073709551615"]);
        assert_eq!(output.status.code(), Some(1), "{}", name);
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("instances must be between"), "{}", stderr);
    }
}

#[test]
fn test_config_file_parameters() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "seed = 7\nformat = \"lines\"\n[normal]\nstddev = 0.5").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let from_file = run(&["normal", "60", "10", "--config", &path]);
    assert!(from_file.status.success());
    let stdout = String::from_utf8(from_file.stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 10);

    let from_flags = run(&["normal", "60", "10", "--seed", "7", "--format", "lines", "--stddev", "0.5"]);
    assert_eq!(from_file.stdout, from_flags.stdout);
}
