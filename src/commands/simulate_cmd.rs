use std::process::ExitCode;

use crate::commands::base_commands::OutputFormat;
use crate::commands::output::write_output;
use crate::commands::report_format::format_simulation_result;
use crate::services::analysis_yaml::load_analysis_from_yaml_file;
use crate::services::monte_carlo::{run_simulation, run_simulation_seeded};

pub struct SimulateOptions<'a> {
    pub output: Option<&'a str>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub include_samples: bool,
    pub format: OutputFormat,
}

pub fn simulate_command(input: &str, options: SimulateOptions<'_>) -> ExitCode {
    let analysis = match load_analysis_from_yaml_file(input) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Failed to load analysis file: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let config = match analysis.require_simulation() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read simulation inputs: {e}");
            return ExitCode::FAILURE;
        }
    };

    let iterations = options.iterations.unwrap_or(config.iterations);
    let simulation = match options.seed.or(config.seed) {
        Some(seed) => run_simulation_seeded(&config.variables, iterations, seed),
        None => run_simulation(&config.variables, iterations),
    };
    let mut simulation = match simulation {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to run simulation: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_simulation_result(&simulation));
    if let Some(output) = options.output {
        if !options.include_samples {
            simulation.discard_samples();
        }
        if let Err(e) = write_output(output, &simulation, options.format) {
            eprintln!("Failed to write simulation output: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Simulation result for {iterations} iterations written to {output}");
    }
    ExitCode::SUCCESS
}
