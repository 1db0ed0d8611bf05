use std::process::ExitCode;

use crate::commands::base_commands::OutputFormat;
use crate::commands::output::write_output;
use crate::commands::report_format::format_sensitivity_analysis;
use crate::services::analysis_yaml::load_analysis_from_yaml_file;
use crate::services::sensitivity::{RankingMode, analyze_variables};

pub fn sensitivity_command(
    input: &str,
    output: Option<&str>,
    order: Option<RankingMode>,
    format: OutputFormat,
) -> ExitCode {
    let analysis = match load_analysis_from_yaml_file(input) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Failed to load analysis file: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let config = match analysis.require_sensitivity() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read sensitivity inputs: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = analyze_variables(
        &config.variables,
        config.target_metric,
        config.baseline_value,
        order.unwrap_or(config.order),
    );
    let sensitivity = match result {
        Ok(sensitivity) => sensitivity,
        Err(e) => {
            eprintln!("Failed to run sensitivity analysis: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_sensitivity_analysis(&sensitivity));
    if let Some(output) = output {
        if let Err(e) = write_output(output, &sensitivity, format) {
            eprintln!("Failed to write sensitivity output: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Sensitivity analysis written to {output}");
    }
    ExitCode::SUCCESS
}
