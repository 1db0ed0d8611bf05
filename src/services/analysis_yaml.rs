use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::analysis_variable::{
    AnalysisVariable, AnalysisVariableError, VariableMetric, VariableRange,
};
use crate::domain::energy_source::EnergySource;
use crate::domain::metric::{OutcomeMetric, TargetMetric};
use crate::domain::project_inputs::{HydrogenCostInputs, ProjectCostInputs};
use crate::services::sensitivity::RankingMode;
use crate::services::simulation_types::SimulationVariable;

pub const DEFAULT_ITERATIONS: usize = 10_000;

#[derive(Error, Debug)]
pub enum AnalysisYamlError {
    #[error("failed to read analysis yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse analysis yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("analysis file has no {0} section")]
    MissingSection(&'static str),
    #[error("variable {0}: give either min_value/max_value or min_percentage/max_percentage")]
    AmbiguousRange(String),
    #[error(transparent)]
    Variable(#[from] AnalysisVariableError),
}

/// A parsed analysis file. Every section is optional; commands ask for the
/// ones they need.
#[derive(Debug, Clone)]
pub struct AnalysisFile {
    pub name: Option<String>,
    pub lcoe: Option<ProjectCostInputs>,
    pub lcoh: Option<HydrogenCostInputs>,
    pub simulation: Option<SimulationConfig>,
    pub sensitivity: Option<SensitivityConfig>,
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub iterations: usize,
    pub seed: Option<u64>,
    pub variables: Vec<SimulationVariable>,
}

#[derive(Debug, Clone)]
pub struct SensitivityConfig {
    pub target_metric: TargetMetric,
    pub baseline_value: f64,
    pub order: RankingMode,
    pub variables: Vec<AnalysisVariable>,
}

impl AnalysisFile {
    pub fn require_lcoe(&self) -> Result<&ProjectCostInputs, AnalysisYamlError> {
        self.lcoe
            .as_ref()
            .ok_or(AnalysisYamlError::MissingSection("lcoe"))
    }

    pub fn require_lcoh(&self) -> Result<&HydrogenCostInputs, AnalysisYamlError> {
        self.lcoh
            .as_ref()
            .ok_or(AnalysisYamlError::MissingSection("lcoh"))
    }

    pub fn require_simulation(&self) -> Result<&SimulationConfig, AnalysisYamlError> {
        self.simulation
            .as_ref()
            .ok_or(AnalysisYamlError::MissingSection("simulation"))
    }

    pub fn require_sensitivity(&self) -> Result<&SensitivityConfig, AnalysisYamlError> {
        self.sensitivity
            .as_ref()
            .ok_or(AnalysisYamlError::MissingSection("sensitivity"))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AnalysisRecord {
    name: Option<String>,
    lcoe: Option<ProjectCostRecord>,
    lcoh: Option<HydrogenCostRecord>,
    simulation: Option<SimulationRecord>,
    sensitivity: Option<SensitivityRecord>,
}

/// Omitted fields fall back to the preset of `energy_source`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectCostRecord {
    energy_source: EnergySource,
    initial_investment: Option<f64>,
    capacity_kw: Option<f64>,
    project_life_years: Option<u32>,
    discount_rate: Option<f64>,
    annual_om_cost: Option<f64>,
    fuel_cost: Option<f64>,
    capacity_factor: Option<f64>,
    annual_degradation: Option<f64>,
    battery_capacity_kwh: Option<f64>,
    battery_round_trip_efficiency: Option<f64>,
    battery_replacement_year: Option<u32>,
    battery_replacement_cost: Option<f64>,
    tax_rate: Option<f64>,
    investment_tax_credit: Option<f64>,
    production_tax_credit: Option<f64>,
    carbon_emissions_factor: Option<f64>,
    carbon_price: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HydrogenCostRecord {
    electrolyzer_capacity_kw: f64,
    capacity_factor: f64,
    electrolyzer_consumption_kwh_per_kg: f64,
    electricity_price: f64,
    capital_cost: f64,
    annual_om_cost: f64,
    project_life_years: u32,
    discount_rate: f64,
    water_cost_per_kg: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationRecord {
    iterations: Option<usize>,
    seed: Option<u64>,
    variables: Vec<SimulationVariableRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationVariableRecord {
    metric: OutcomeMetric,
    mean: f64,
    std_dev: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SensitivityRecord {
    target_metric: TargetMetric,
    baseline_value: f64,
    #[serde(default)]
    order: RankingMode,
    variables: Vec<AnalysisVariableRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AnalysisVariableRecord {
    id: String,
    name: Option<String>,
    base_value: f64,
    min_value: Option<f64>,
    max_value: Option<f64>,
    min_percentage: Option<f64>,
    max_percentage: Option<f64>,
    #[serde(default)]
    category: String,
    #[serde(default = "default_variable_metric")]
    metric: VariableMetric,
}

fn default_variable_metric() -> VariableMetric {
    VariableMetric::Other
}

pub fn load_analysis_from_yaml_file(path: &str) -> Result<AnalysisFile, AnalysisYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_analysis_from_yaml_str(&contents)
}

pub fn deserialize_analysis_from_yaml_str(input: &str) -> Result<AnalysisFile, AnalysisYamlError> {
    let record: AnalysisRecord = serde_yaml::from_str(input)?;

    let sensitivity = match record.sensitivity {
        Some(record) => Some(sensitivity_from_record(record)?),
        None => None,
    };

    Ok(AnalysisFile {
        name: record.name,
        lcoe: record.lcoe.map(project_inputs_from_record),
        lcoh: record.lcoh.map(hydrogen_inputs_from_record),
        simulation: record.simulation.map(simulation_from_record),
        sensitivity,
    })
}

fn project_inputs_from_record(record: ProjectCostRecord) -> ProjectCostInputs {
    let preset = record.energy_source.defaults();
    ProjectCostInputs {
        energy_source: record.energy_source,
        initial_investment: record.initial_investment.unwrap_or(preset.initial_investment),
        capacity_kw: record.capacity_kw.unwrap_or(preset.capacity_kw),
        project_life_years: record
            .project_life_years
            .unwrap_or(preset.project_life_years),
        discount_rate: record.discount_rate.unwrap_or(preset.discount_rate),
        annual_om_cost: record.annual_om_cost.unwrap_or(preset.annual_om_cost),
        fuel_cost: record.fuel_cost.unwrap_or(preset.fuel_cost),
        capacity_factor: record.capacity_factor.unwrap_or(preset.capacity_factor),
        annual_degradation: record
            .annual_degradation
            .unwrap_or(preset.annual_degradation),
        battery_capacity_kwh: record.battery_capacity_kwh.or(preset.battery_capacity_kwh),
        battery_round_trip_efficiency: record
            .battery_round_trip_efficiency
            .or(preset.battery_round_trip_efficiency),
        battery_replacement_year: record
            .battery_replacement_year
            .or(preset.battery_replacement_year),
        battery_replacement_cost: record
            .battery_replacement_cost
            .or(preset.battery_replacement_cost),
        tax_rate: record.tax_rate.or(preset.tax_rate),
        investment_tax_credit: record.investment_tax_credit.or(preset.investment_tax_credit),
        production_tax_credit: record.production_tax_credit.or(preset.production_tax_credit),
        carbon_emissions_factor: record
            .carbon_emissions_factor
            .or(preset.carbon_emissions_factor),
        carbon_price: record.carbon_price.or(preset.carbon_price),
    }
}

fn hydrogen_inputs_from_record(record: HydrogenCostRecord) -> HydrogenCostInputs {
    HydrogenCostInputs {
        electrolyzer_capacity_kw: record.electrolyzer_capacity_kw,
        capacity_factor: record.capacity_factor,
        electrolyzer_consumption_kwh_per_kg: record.electrolyzer_consumption_kwh_per_kg,
        electricity_price: record.electricity_price,
        capital_cost: record.capital_cost,
        annual_om_cost: record.annual_om_cost,
        project_life_years: record.project_life_years,
        discount_rate: record.discount_rate,
        water_cost_per_kg: record.water_cost_per_kg,
    }
}

fn simulation_from_record(record: SimulationRecord) -> SimulationConfig {
    SimulationConfig {
        iterations: record.iterations.unwrap_or(DEFAULT_ITERATIONS),
        seed: record.seed,
        variables: record
            .variables
            .into_iter()
            .map(|variable| SimulationVariable {
                metric: variable.metric,
                mean: variable.mean,
                std_dev: variable.std_dev,
            })
            .collect(),
    }
}

fn sensitivity_from_record(
    record: SensitivityRecord,
) -> Result<SensitivityConfig, AnalysisYamlError> {
    let variables = record
        .variables
        .into_iter()
        .map(variable_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SensitivityConfig {
        target_metric: record.target_metric,
        baseline_value: record.baseline_value,
        order: record.order,
        variables,
    })
}

fn variable_from_record(record: AnalysisVariableRecord) -> Result<AnalysisVariable, AnalysisYamlError> {
    let range = match (
        record.min_value,
        record.max_value,
        record.min_percentage,
        record.max_percentage,
    ) {
        (Some(min_value), Some(max_value), None, None) => VariableRange::Absolute {
            min_value,
            max_value,
        },
        (None, None, Some(min_percentage), Some(max_percentage)) => VariableRange::Percentage {
            min_percentage,
            max_percentage,
        },
        _ => return Err(AnalysisYamlError::AmbiguousRange(record.id)),
    };

    let name = record.name.unwrap_or_else(|| record.id.clone());
    Ok(AnalysisVariable::new(
        record.id,
        name,
        record.base_value,
        range,
        record.category,
        record.metric,
    )?)
}
