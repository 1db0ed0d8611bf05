use crate::domain::metric::Comparison;
use crate::services::analysis_report::AnalysisReport;
use crate::services::levelized_cost_types::{LcoeBreakdown, LcohBreakdown};
use crate::services::sensitivity::{SensitivityAnalysis, rank_variables};
use crate::services::simulation_types::{MetricSimulation, SimulationResult};

const UNDEFINED: &str = "undefined (insufficient production)";

pub fn format_lcoe_breakdown(breakdown: &LcoeBreakdown) -> String {
    let mut lines = Vec::new();
    lines.push("LCOE Breakdown".to_string());
    lines.push(format!("Total LCOE: {}", money_per_unit(breakdown.total_lcoe, "MWh")));
    lines.push(format!(
        "Discounted energy: {:.2} MWh",
        breakdown.discounted_energy_mwh
    ));
    lines.push(String::new());
    lines.push("Component | $/MWh".to_string());
    lines.push("----------|------".to_string());
    lines.push(component_row("Capital", breakdown.capital_component));
    lines.push(component_row("O&M", breakdown.o_and_m_component));
    lines.push(component_row("Fuel", breakdown.fuel_component));
    lines.push(component_row("Tax", breakdown.tax_component));
    lines.push(component_row("Incentives", breakdown.incentive_component));
    lines.push(component_row("Carbon", breakdown.carbon_component));

    lines.join("\n")
}

pub fn format_lcoh_breakdown(breakdown: &LcohBreakdown) -> String {
    let mut lines = Vec::new();
    lines.push("LCOH Breakdown".to_string());
    lines.push(format!("Total LCOH: {}", money_per_unit(breakdown.total_lcoh, "kg")));
    lines.push(format!(
        "Annual hydrogen: {:.2} kg",
        breakdown.annual_hydrogen_kg
    ));
    lines.push(String::new());
    lines.push("Component | $/kg".to_string());
    lines.push("----------|-----".to_string());
    lines.push(component_row("Electricity", breakdown.electricity_component));
    lines.push(component_row("Capital", breakdown.capital_component));
    lines.push(component_row("O&M", breakdown.o_and_m_component));
    lines.push(component_row("Water", breakdown.water_component));

    lines.join("\n")
}

pub fn format_simulation_result(result: &SimulationResult) -> String {
    let seed = match result.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Monte Carlo Simulation".to_string());
    lines.push(format!("Iterations: {}", result.iterations));
    lines.push(format!("Seed: {seed}"));
    lines.push(String::new());
    lines.push("Metric | Mean | Std dev | P10 | P50 | P90 | 95% CI | Probability".to_string());
    lines.push("-------|------|---------|-----|-----|-----|--------|------------".to_string());
    for metric in &result.metrics {
        lines.push(format_metric_row(metric));
    }

    lines.join("\n")
}

pub fn format_sensitivity_analysis(analysis: &SensitivityAnalysis) -> String {
    let mut lines = Vec::new();
    lines.push("Sensitivity Analysis".to_string());
    lines.push(format!("Target metric: {}", analysis.target_metric.name()));
    lines.push(format!("Baseline: {:.4}", analysis.baseline_value));
    lines.push(format!(
        "Ranking: {}",
        rank_variables(&analysis.results, analysis.ranking_mode).join(" > ")
    ));
    lines.push(String::new());
    lines.push("Variable | Range | Low impact | High impact | Impact".to_string());
    lines.push("---------|-------|------------|-------------|-------".to_string());
    for result in &analysis.results {
        lines.push(format!(
            "{name} | {low:+.1}% / {high:+.1}% | {negative:+.4} | {positive:+.4} | {impact:.4}",
            name = result.name,
            low = result.negative_change,
            high = result.positive_change,
            negative = result.negative_impact,
            positive = result.positive_impact,
            impact = result.impact,
        ));
    }

    lines.join("\n")
}

pub fn format_analysis_report(report: &AnalysisReport) -> String {
    let mut sections = Vec::new();
    let mut header = vec!["Project Finance Report".to_string()];
    if let Some(name) = &report.name {
        header.push(format!("Project: {name}"));
    }
    header.push(format!("Data source: {}", report.data_source));
    header.push(format!("Generated at: {}", report.generated_at));
    sections.push(header.join("\n"));

    if let Some(lcoe) = &report.lcoe {
        sections.push(format_lcoe_breakdown(lcoe));
    }
    if let Some(lcoh) = &report.lcoh {
        sections.push(format_lcoh_breakdown(lcoh));
    }
    if let Some(simulation) = &report.simulation {
        sections.push(format_simulation_result(simulation));
    }
    if let Some(sensitivity) = &report.sensitivity {
        sections.push(format_sensitivity_analysis(sensitivity));
    }

    sections.join("\n\n")
}

fn format_metric_row(metric: &MetricSimulation) -> String {
    let summary = &metric.summary;
    let comparison = match metric.probability.comparison {
        Comparison::GreaterThan => ">",
        Comparison::LessThan => "<",
    };
    format!(
        "{name} | {mean:.4} | {std_dev:.4} | {p10:.4} | {p50:.4} | {p90:.4} | [{lower:.4}, {upper:.4}] | P({name} {comparison} {threshold}) = {probability:.1}%",
        name = metric.metric.name(),
        mean = summary.mean,
        std_dev = summary.std_dev,
        p10 = summary.percentiles.p10,
        p50 = summary.percentiles.p50,
        p90 = summary.percentiles.p90,
        lower = summary.confidence_interval.lower,
        upper = summary.confidence_interval.upper,
        threshold = metric.probability.threshold,
        probability = metric.probability.probability * 100.0,
    )
}

fn money_per_unit(value: f64, unit: &str) -> String {
    if value.is_finite() {
        format!("{value:.2} $/{unit}")
    } else {
        UNDEFINED.to_string()
    }
}

fn component_row(label: &str, value: f64) -> String {
    let value = if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    };
    format!("{label} | {value}")
}
