use std::process::ExitCode;

use crate::commands::base_commands::OutputFormat;
use crate::commands::output::write_output;
use crate::commands::report_format::{format_lcoe_breakdown, format_lcoh_breakdown};
use crate::services::analysis_yaml::load_analysis_from_yaml_file;
use crate::services::levelized_cost::{compute_lcoe, compute_lcoh};

pub fn lcoe_command(input: &str, output: Option<&str>, format: OutputFormat) -> ExitCode {
    let analysis = match load_analysis_from_yaml_file(input) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Failed to load analysis file: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let inputs = match analysis.require_lcoe() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Failed to read LCOE inputs: {e}");
            return ExitCode::FAILURE;
        }
    };
    let breakdown = match compute_lcoe(inputs) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            eprintln!("Failed to compute LCOE: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_lcoe_breakdown(&breakdown));
    if let Some(output) = output {
        if let Err(e) = write_output(output, &breakdown, format) {
            eprintln!("Failed to write LCOE breakdown: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("LCOE breakdown written to {output}");
    }
    ExitCode::SUCCESS
}

pub fn lcoh_command(input: &str, output: Option<&str>, format: OutputFormat) -> ExitCode {
    let analysis = match load_analysis_from_yaml_file(input) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Failed to load analysis file: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let inputs = match analysis.require_lcoh() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Failed to read LCOH inputs: {e}");
            return ExitCode::FAILURE;
        }
    };
    let breakdown = match compute_lcoh(inputs) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            eprintln!("Failed to compute LCOH: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_lcoh_breakdown(&breakdown));
    if let Some(output) = output {
        if let Err(e) = write_output(output, &breakdown, format) {
            eprintln!("Failed to write LCOH breakdown: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("LCOH breakdown written to {output}");
    }
    ExitCode::SUCCESS
}
