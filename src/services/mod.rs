pub mod analysis_report;
pub mod analysis_yaml;
pub mod levelized_cost;
pub mod levelized_cost_types;
pub mod monte_carlo;
pub mod normal_sampler;
pub mod percentiles;
pub mod sensitivity;
pub mod simulation_types;
