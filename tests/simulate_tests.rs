use assert_fs::prelude::*;
use predicates::prelude::*;

const SIMULATION: &str = "simulation:
  iterations: 500
  variables:
    - metric: npv
      mean: 250000
      std_dev: 100000
    - metric: irr
      mean: 0.12
      std_dev: 0.02
    - metric: paybackPeriod
      mean: 6
      std_dev: 1
";

fn run_simulate(dir: &assert_fs::TempDir, output_name: &str, extra: &[&str]) -> String {
    let input = dir.child("simulation.yaml");
    input.write_str(SIMULATION).unwrap();
    let output = dir.child(output_name);

    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args([
        "simulate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);
    cmd.args(extra);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Monte Carlo Simulation"));

    std::fs::read_to_string(output.path()).unwrap()
}

#[test]
fn simulate_writes_summary_without_samples() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = run_simulate(&dir, "result.yaml", &["-s", "42"]);

    assert!(output.contains("iterations: 500"));
    assert!(output.contains("seed: 42"));
    assert!(output.contains("metric: npv"));
    assert!(output.contains("metric: paybackPeriod"));
    assert!(output.contains("confidence_interval:"));
    assert!(output.contains("probability:"));
    assert!(!output.contains("samples:"));
}

#[test]
fn simulate_with_same_seed_is_reproducible() {
    let dir = assert_fs::TempDir::new().unwrap();
    let first = run_simulate(&dir, "first.yaml", &["-s", "7", "-n", "100"]);
    let second = run_simulate(&dir, "second.yaml", &["-s", "7", "-n", "100"]);
    assert_eq!(first, second);
}

#[test]
fn simulate_can_keep_samples() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = run_simulate(&dir, "samples.yaml", &["-n", "3", "--include-samples"]);
    assert!(output.contains("samples:"));
}

#[test]
fn simulate_rejects_zero_iterations() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("simulation.yaml");
    input.write_str(SIMULATION).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args(["simulate", "-i", input.path().to_str().unwrap(), "-n", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("iterations must be greater than zero"));
}
