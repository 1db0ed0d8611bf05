pub mod analysis_variable;
pub mod energy_source;
pub mod metric;
pub mod project_inputs;
