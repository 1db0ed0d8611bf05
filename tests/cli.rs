use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("lcoe"))
        .stdout(predicate::str::contains("sensitivity"));
    Ok(())
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args(["lcoe", "-i", "does-not-exist.yaml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load analysis file"));
}
