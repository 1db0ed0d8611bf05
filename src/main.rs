mod commands;
mod domain;
mod logging;
mod services;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::lcoe_cmd::{lcoe_command, lcoh_command};
use crate::commands::presets_cmd::presets_command;
use crate::commands::report_cmd::report_command;
use crate::commands::sensitivity_cmd::sensitivity_command;
use crate::commands::simulate_cmd::{SimulateOptions, simulate_command};
use crate::logging::init_logging;
use crate::services::analysis_report::SimulationOverrides;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Lcoe {
            input,
            output,
            format,
        } => lcoe_command(&input, output.as_deref(), format),
        Commands::Lcoh {
            input,
            output,
            format,
        } => lcoh_command(&input, output.as_deref(), format),
        Commands::Simulate {
            input,
            output,
            iterations,
            seed,
            include_samples,
            format,
        } => simulate_command(
            &input,
            SimulateOptions {
                output: output.as_deref(),
                iterations,
                seed,
                include_samples,
                format,
            },
        ),
        Commands::Sensitivity {
            input,
            output,
            order,
            format,
        } => sensitivity_command(&input, output.as_deref(), order, format),
        Commands::Report {
            input,
            output,
            iterations,
            seed,
            format,
        } => report_command(
            &input,
            &output,
            SimulationOverrides { iterations, seed },
            format,
        ),
        Commands::Presets { energy_source } => presets_command(energy_source),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
