use assert_fs::prelude::*;
use predicates::prelude::*;

const WIND_ANALYSIS: &str = "lcoe:
  energy_source: wind
  initial_investment: 1500000
  capacity_kw: 1000
  capacity_factor: 0.35
  annual_om_cost: 30000
  production_tax_credit: 25
  project_life_years: 25
  discount_rate: 0.08
  annual_degradation: 0.005
lcoh:
  electrolyzer_capacity_kw: 1000
  capacity_factor: 0.5
  electrolyzer_consumption_kwh_per_kg: 50
  electricity_price: 40
  capital_cost: 1000000
  annual_om_cost: 20000
  project_life_years: 20
  discount_rate: 0.08
";

#[test]
fn lcoe_prints_breakdown_and_writes_yaml() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("wind.yaml");
    input.write_str(WIND_ANALYSIS).unwrap();
    let output = dir.child("lcoe.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args([
        "lcoe",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total LCOE: 32.9"))
        .stdout(predicate::str::contains("LCOE breakdown written to"));

    output.assert(predicate::str::contains("total_lcoe:"));
    output.assert(predicate::str::contains("incentive_component: -25"));
}

#[test]
fn lcoe_reports_undefined_for_idle_plant() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("idle.yaml");
    input
        .write_str("lcoe:\n  energy_source: solar\n  capacity_factor: 0\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args(["lcoe", "-i", input.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Total LCOE: undefined (insufficient production)",
        ));
}

#[test]
fn lcoe_rejects_invalid_inputs() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("broken.yaml");
    input
        .write_str("lcoe:\n  energy_source: solar\n  discount_rate: -1\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args(["lcoe", "-i", input.path().to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid input discount_rate"));
}

#[test]
fn lcoh_writes_json_breakdown() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("hydrogen.yaml");
    input.write_str(WIND_ANALYSIS).unwrap();
    let output = dir.child("lcoh.json");

    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args([
        "lcoh",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "-f",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Electricity | 2.00"));

    output.assert(predicate::str::contains("\"electricity_component\": 2.0"));
}
