use chrono::{Local, SecondsFormat};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::services::analysis_yaml::{AnalysisFile, AnalysisYamlError, load_analysis_from_yaml_file};
use crate::services::levelized_cost::{LevelizedCostError, compute_lcoe, compute_lcoh};
use crate::services::levelized_cost_types::{LcoeBreakdown, LcohBreakdown};
use crate::services::monte_carlo::{SimulationError, run_simulation, run_simulation_seeded};
use crate::services::sensitivity::{SensitivityAnalysis, SensitivityError, analyze_variables};
use crate::services::simulation_types::SimulationResult;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Analysis(#[from] AnalysisYamlError),
    #[error("levelized cost: {0}")]
    LevelizedCost(#[from] LevelizedCostError),
    #[error("simulation: {0}")]
    Simulation(#[from] SimulationError),
    #[error("sensitivity: {0}")]
    Sensitivity(#[from] SensitivityError),
    #[error("analysis file has no sections to report on")]
    Empty,
}

/// Results of every engine that has a section in the analysis file.
#[derive(Serialize, Debug, Clone)]
pub struct AnalysisReport {
    pub name: Option<String>,
    pub data_source: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcoe: Option<LcoeBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcoh: Option<LcohBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivityAnalysis>,
}

/// Caller-side overrides of the simulation section.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationOverrides {
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
}

pub fn report_from_yaml_file(
    path: &str,
    overrides: SimulationOverrides,
) -> Result<AnalysisReport, ReportError> {
    let analysis = load_analysis_from_yaml_file(path)?;
    let mut report = build_report(&analysis, overrides)?;
    report.data_source = data_source_name(path);
    Ok(report)
}

/// Runs the engines independently against one analysis; none of them sees
/// another's output.
pub fn build_report(
    analysis: &AnalysisFile,
    overrides: SimulationOverrides,
) -> Result<AnalysisReport, ReportError> {
    if analysis.lcoe.is_none()
        && analysis.lcoh.is_none()
        && analysis.simulation.is_none()
        && analysis.sensitivity.is_none()
    {
        return Err(ReportError::Empty);
    }

    let lcoe = analysis.lcoe.as_ref().map(compute_lcoe).transpose()?;
    let lcoh = analysis.lcoh.as_ref().map(compute_lcoh).transpose()?;
    let simulation = match &analysis.simulation {
        Some(config) => {
            let iterations = overrides.iterations.unwrap_or(config.iterations);
            Some(match overrides.seed.or(config.seed) {
                Some(seed) => run_simulation_seeded(&config.variables, iterations, seed)?,
                None => run_simulation(&config.variables, iterations)?,
            })
        }
        None => None,
    };
    let sensitivity = match &analysis.sensitivity {
        Some(config) => Some(analyze_variables(
            &config.variables,
            config.target_metric,
            config.baseline_value,
            config.order,
        )?),
        None => None,
    };

    info!(name = analysis.name.as_deref().unwrap_or(""), "Built analysis report");

    Ok(AnalysisReport {
        name: analysis.name.clone(),
        data_source: String::new(),
        generated_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        lcoe,
        lcoh,
        simulation,
        sensitivity,
    })
}

pub fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
