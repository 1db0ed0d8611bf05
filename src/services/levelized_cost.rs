use tracing::{debug, warn};

pub use crate::domain::project_inputs::LevelizedCostError;
use crate::domain::project_inputs::{HydrogenCostInputs, ProjectCostInputs};
use crate::services::levelized_cost_types::{LcoeBreakdown, LcohBreakdown};

/// Discounted cash flow LCOE.
///
/// Year 0 carries the investment net of the investment tax credit; years
/// `1..=life` carry O&M, fuel, battery replacement, production credits and
/// carbon cost for the production of the preceding year index. The tax shield
/// only reduces years whose net cash flow is still a cost.
///
/// A plant without production returns a non-finite total rather than an error.
pub fn compute_lcoe(inputs: &ProjectCostInputs) -> Result<LcoeBreakdown, LevelizedCostError> {
    inputs.validate()?;

    let life = inputs.project_life_years as usize;
    let rate = inputs.discount_rate;
    let first_year_energy = inputs.first_year_energy_mwh();

    let energy: Vec<f64> = (0..life)
        .map(|year| first_year_energy * (1.0 - inputs.annual_degradation).powi(year as i32))
        .collect();

    let discounted_energy: f64 = energy
        .iter()
        .enumerate()
        .map(|(year, mwh)| mwh / (1.0 + rate).powi(year as i32 + 1))
        .sum();

    let investment_tax_credit = inputs.investment_tax_credit.unwrap_or(0.0);
    let mut costs = Vec::with_capacity(life + 1);
    costs.push(-inputs.initial_investment * (1.0 - investment_tax_credit));

    for year in 1..=life {
        let produced = energy[year - 1];
        let mut cost = -(inputs.annual_om_cost + inputs.fuel_cost * produced);

        if inputs.battery_replacement_year == Some(year as u32) {
            cost -= inputs.battery_replacement_cost.unwrap_or(0.0);
        }
        if let Some(credit) = inputs.production_tax_credit {
            cost += credit * produced;
        }
        if let (Some(factor), Some(price)) = (inputs.carbon_emissions_factor, inputs.carbon_price)
        {
            cost -= factor * produced * price;
        }
        if let Some(tax_rate) = inputs.tax_rate {
            if cost < 0.0 {
                cost *= 1.0 - tax_rate;
            }
        }
        costs.push(cost);
    }

    let npv_costs: f64 = costs
        .iter()
        .enumerate()
        .map(|(year, cost)| cost / (1.0 + rate).powi(year as i32))
        .sum();

    let total_lcoe = npv_costs.abs() / discounted_energy;

    let capital_component = costs[0].abs() / discounted_energy;
    let o_and_m_component = inputs.annual_om_cost * life as f64 / discounted_energy;
    let fuel_component = inputs.fuel_cost * energy.iter().sum::<f64>() / discounted_energy;
    let tax_component = inputs
        .tax_rate
        .map_or(0.0, |rate| -o_and_m_component * rate);
    let incentive_component = -capital_component * investment_tax_credit
        - inputs.production_tax_credit.unwrap_or(0.0);
    // Emissions factor times price is already a cost per MWh.
    let carbon_component = match (inputs.carbon_emissions_factor, inputs.carbon_price) {
        (Some(factor), Some(price)) => factor * price,
        _ => 0.0,
    };

    let breakdown = LcoeBreakdown {
        total_lcoe,
        capital_component,
        o_and_m_component,
        fuel_component,
        tax_component,
        incentive_component,
        carbon_component,
        discounted_energy_mwh: discounted_energy,
        npv_costs,
    };

    if breakdown.is_defined() {
        debug!(
            source = inputs.energy_source.name(),
            lcoe = breakdown.total_lcoe,
            components = breakdown.component_sum(),
            discounted_energy,
            "Computed LCOE"
        );
    } else {
        warn!(
            source = inputs.energy_source.name(),
            "LCOE is undefined: the project produces no discounted energy"
        );
    }
    Ok(breakdown)
}

/// Simplified LCOH: electricity cost per kilogram plus capital amortized with
/// the capital recovery factor and O&M, both spread over annual output.
pub fn compute_lcoh(inputs: &HydrogenCostInputs) -> Result<LcohBreakdown, LevelizedCostError> {
    inputs.validate()?;

    let annual_hydrogen_kg = inputs.annual_hydrogen_kg();
    let crf = capital_recovery_factor(inputs.project_life_years, inputs.discount_rate);

    let electricity_component =
        inputs.electricity_price * inputs.electrolyzer_consumption_kwh_per_kg / 1000.0;
    let capital_component = inputs.capital_cost * crf / annual_hydrogen_kg;
    let o_and_m_component = inputs.annual_om_cost / annual_hydrogen_kg;
    let water_component = inputs.water_cost_per_kg.unwrap_or(0.0);

    let breakdown = LcohBreakdown {
        total_lcoh: electricity_component + capital_component + o_and_m_component + water_component,
        electricity_component,
        capital_component,
        o_and_m_component,
        water_component,
        annual_hydrogen_kg,
    };

    if !breakdown.is_defined() {
        warn!("LCOH is undefined: the electrolyzer produces no hydrogen");
    }
    Ok(breakdown)
}

/// Annuity factor spreading a present cost evenly over `lifetime` years.
pub fn capital_recovery_factor(lifetime: u32, discount_rate: f64) -> f64 {
    if lifetime == 0 {
        return 0.0;
    }
    if discount_rate == 0.0 {
        return 1.0 / lifetime as f64;
    }
    let factor = (1.0 + discount_rate).powi(lifetime as i32);
    discount_rate * factor / (factor - 1.0)
}
