use std::process::ExitCode;

use crate::commands::base_commands::OutputFormat;
use crate::commands::output::serialize_output;
use crate::domain::energy_source::EnergySource;

pub fn presets_command(energy_source: Option<EnergySource>) -> ExitCode {
    let presets: Vec<_> = match energy_source {
        Some(source) => vec![source.defaults()],
        None => EnergySource::ALL.iter().map(|source| source.defaults()).collect(),
    };

    match serialize_output(&presets, OutputFormat::Yaml) {
        Ok(yaml) => {
            print!("{yaml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize presets: {e:?}");
            ExitCode::FAILURE
        }
    }
}
