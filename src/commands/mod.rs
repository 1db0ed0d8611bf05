pub mod base_commands;
pub mod lcoe_cmd;
pub mod output;
pub mod presets_cmd;
pub mod report_cmd;
pub mod report_format;
pub mod sensitivity_cmd;
pub mod simulate_cmd;
