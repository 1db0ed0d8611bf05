use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::energy_source::EnergySource;
use crate::services::sensitivity::RankingMode;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the levelized cost of energy for the lcoe section of an analysis file
    Lcoe {
        /// Analysis YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output file for the breakdown
        #[arg(short, long)]
        output: Option<String>,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Compute the levelized cost of hydrogen for the lcoh section of an analysis file
    Lcoh {
        /// Analysis YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output file for the breakdown
        #[arg(short, long)]
        output: Option<String>,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Run a Monte Carlo simulation of project outcome metrics
    Simulate {
        /// Analysis YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output file for the simulation result
        #[arg(short, long)]
        output: Option<String>,
        /// Number of simulation iterations, overrides the analysis file
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for a reproducible run, overrides the analysis file
        #[arg(short, long)]
        seed: Option<u64>,
        /// Keep every sampled value in the output file
        #[arg(long)]
        include_samples: bool,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Run a one-at-a-time sensitivity (tornado) analysis
    Sensitivity {
        /// Analysis YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output file for the ranked impacts
        #[arg(short, long)]
        output: Option<String>,
        /// Ranking order, overrides the analysis file
        #[arg(long, value_enum)]
        order: Option<RankingMode>,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Run every analysis present in the file and write a combined report
    Report {
        /// Analysis YAML file
        #[arg(short, long)]
        input: String,
        /// Output file for the report
        #[arg(short, long)]
        output: String,
        /// Number of simulation iterations, overrides the analysis file
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for a reproducible run, overrides the analysis file
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Print the default project parameters of each energy source
    Presets {
        /// Only print the preset of this source
        #[arg(value_enum)]
        energy_source: Option<EnergySource>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
