use std::process::ExitCode;

use crate::commands::base_commands::OutputFormat;
use crate::commands::output::write_output;
use crate::commands::report_format::format_analysis_report;
use crate::services::analysis_report::{SimulationOverrides, report_from_yaml_file};

pub fn report_command(
    input: &str,
    output: &str,
    overrides: SimulationOverrides,
    format: OutputFormat,
) -> ExitCode {
    let mut report = match report_from_yaml_file(input, overrides) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to build report: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_analysis_report(&report));
    if let Some(simulation) = report.simulation.as_mut() {
        simulation.discard_samples();
    }
    if let Err(e) = write_output(output, &report, format) {
        eprintln!("Failed to write report: {e:?}");
        return ExitCode::FAILURE;
    }
    println!("Report written to {output}");
    ExitCode::SUCCESS
}
