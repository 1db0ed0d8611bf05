use predicates::prelude::*;

#[test]
fn presets_lists_every_energy_source() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.arg("presets");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("energy_source: solar"))
        .stdout(predicate::str::contains("energy_source: wind"))
        .stdout(predicate::str::contains("energy_source: battery"))
        .stdout(predicate::str::contains("energy_source: hybrid"));
}

#[test]
fn presets_can_select_one_source() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projectfin");
    cmd.args(["presets", "battery"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("battery_replacement_year: 10"))
        .stdout(predicate::str::contains("energy_source: solar").not());
}
