use std::borrow::Borrow;
use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::analysis_variable::{AnalysisVariable, VariableMetric, VariableRange};
use crate::domain::metric::TargetMetric;

const PROPORTIONAL_SCALE: f64 = 0.1;

#[derive(Error, Debug, PartialEq)]
pub enum SensitivityError {
    #[error("baseline value must be finite, got {0}")]
    InvalidBaseline(f64),
    #[error("variable id {0} is used more than once")]
    DuplicateVariable(String),
}

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    #[default]
    Impact,
    Alphabetical,
}

/// One bar of a tornado chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImpactResult {
    pub variable_id: String,
    pub name: String,
    pub category: String,
    pub base_value: f64,
    pub range: VariableRange,
    /// Signed downside perturbation in percent.
    pub negative_change: f64,
    pub positive_change: f64,
    pub negative_impact: f64,
    pub positive_impact: f64,
    /// Larger of the two impact magnitudes.
    pub impact: f64,
    pub low_value: f64,
    pub high_value: f64,
    /// Impact as a share of the baseline, absent for a zero baseline.
    pub share_of_baseline: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SensitivityAnalysis {
    pub target_metric: TargetMetric,
    pub baseline_value: f64,
    pub ranking_mode: RankingMode,
    /// Results in ranked order.
    pub results: Vec<ImpactResult>,
}

/// Weight of a variable's perturbation on the target metric.
pub fn sensitivity_factor(target: TargetMetric, variable: &AnalysisVariable) -> f64 {
    match target {
        TargetMetric::Npv => match variable.metric() {
            VariableMetric::Revenue => 1.5,
            _ => 0.8,
        },
        TargetMetric::Lcoe => {
            let category = variable.category();
            if category.eq_ignore_ascii_case("solar") || category.eq_ignore_ascii_case("wind") {
                1.8
            } else {
                0.9
            }
        }
        _ => 1.0,
    }
}

/// Signed change of `target` when `variable` alone moves by `percentage_change`
/// percent of its base value.
///
/// The baseline is accepted so callers can pass the full context of the
/// perturbation, but the weighting table does not depend on it.
pub fn compute_impact(
    variable: &AnalysisVariable,
    target: TargetMetric,
    _baseline_value: f64,
    percentage_change: f64,
) -> f64 {
    let factor = sensitivity_factor(target, variable);
    let impact = variable.base_value() * (percentage_change / 100.0) * factor;
    if target.is_proportional() {
        impact * PROPORTIONAL_SCALE
    } else {
        impact
    }
}

/// One-at-a-time analysis of every variable, ranked with `mode`.
pub fn analyze_variables(
    variables: &[AnalysisVariable],
    target: TargetMetric,
    baseline_value: f64,
    mode: RankingMode,
) -> Result<SensitivityAnalysis, SensitivityError> {
    if !baseline_value.is_finite() {
        return Err(SensitivityError::InvalidBaseline(baseline_value));
    }
    let mut seen = HashSet::with_capacity(variables.len());
    for variable in variables {
        if !seen.insert(variable.id()) {
            return Err(SensitivityError::DuplicateVariable(variable.id().to_string()));
        }
    }

    info!(
        target = target.name(),
        baseline_value,
        variables = variables.len(),
        "Running sensitivity analysis"
    );

    let mut results: Vec<ImpactResult> = variables
        .iter()
        .map(|variable| impact_result(variable, target, baseline_value))
        .collect();
    sort_results(&mut results, mode);

    Ok(SensitivityAnalysis {
        target_metric: target,
        baseline_value,
        ranking_mode: mode,
        results,
    })
}

/// Variable ids ordered for display. Ranking by impact is stable, so tied
/// variables keep their input order.
pub fn rank_variables(impacts: &[ImpactResult], mode: RankingMode) -> Vec<String> {
    let mut ordered: Vec<&ImpactResult> = impacts.iter().collect();
    sort_results(&mut ordered, mode);
    ordered
        .into_iter()
        .map(|result| result.variable_id.clone())
        .collect()
}

fn sort_results<T: Borrow<ImpactResult>>(results: &mut [T], mode: RankingMode) {
    match mode {
        RankingMode::Impact => results.sort_by(|a, b| {
            ranking_key(b.borrow()).total_cmp(&ranking_key(a.borrow()))
        }),
        RankingMode::Alphabetical => {
            results.sort_by(|a, b| a.borrow().name.cmp(&b.borrow().name))
        }
    }
}

fn ranking_key(result: &ImpactResult) -> f64 {
    result.positive_impact.abs().max(result.negative_impact.abs())
}

fn impact_result(
    variable: &AnalysisVariable,
    target: TargetMetric,
    baseline_value: f64,
) -> ImpactResult {
    let (min_percentage, max_percentage) = variable.percentage_range();
    let positive_impact = compute_impact(variable, target, baseline_value, max_percentage);
    let negative_impact = compute_impact(variable, target, baseline_value, -min_percentage);
    let impact = positive_impact.abs().max(negative_impact.abs());
    let share_of_baseline = (baseline_value != 0.0).then(|| impact / baseline_value.abs());

    ImpactResult {
        variable_id: variable.id().to_string(),
        name: variable.name().to_string(),
        category: variable.category().to_string(),
        base_value: variable.base_value(),
        range: variable.range(),
        negative_change: -min_percentage,
        positive_change: max_percentage,
        negative_impact,
        positive_impact,
        impact,
        low_value: baseline_value + negative_impact,
        high_value: baseline_value + positive_impact,
        share_of_baseline,
    }
}
