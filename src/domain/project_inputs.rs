use serde::Serialize;
use thiserror::Error;

use crate::domain::energy_source::EnergySource;

pub const HOURS_PER_YEAR: f64 = 8760.0;
pub const MAX_PROJECT_LIFE_YEARS: u32 = 100;

#[derive(Error, Debug, PartialEq)]
pub enum LevelizedCostError {
    #[error("invalid input {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

/// Inputs for a single levelized cost of energy calculation.
///
/// Fractions (rates, factors, credits) are expressed as `0.0..=1.0`, money in
/// the project currency and energy in MWh unless the field name says otherwise.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectCostInputs {
    pub energy_source: EnergySource,
    pub initial_investment: f64,
    pub capacity_kw: f64,
    pub project_life_years: u32,
    pub discount_rate: f64,
    pub annual_om_cost: f64,
    /// Currency per MWh produced.
    pub fuel_cost: f64,
    pub capacity_factor: f64,
    pub annual_degradation: f64,
    pub battery_capacity_kwh: Option<f64>,
    pub battery_round_trip_efficiency: Option<f64>,
    pub battery_replacement_year: Option<u32>,
    pub battery_replacement_cost: Option<f64>,
    pub tax_rate: Option<f64>,
    pub investment_tax_credit: Option<f64>,
    /// Currency per MWh produced.
    pub production_tax_credit: Option<f64>,
    /// Tons of CO2 per MWh.
    pub carbon_emissions_factor: Option<f64>,
    /// Currency per ton of CO2.
    pub carbon_price: Option<f64>,
}

impl ProjectCostInputs {
    /// Rejects inputs that would make the discounted cash flow meaningless.
    ///
    /// A zero capacity factor is accepted: it yields an undefined LCOE, which
    /// the breakdown reports instead of an error.
    pub fn validate(&self) -> Result<(), LevelizedCostError> {
        non_negative("initial_investment", self.initial_investment)?;
        if !self.capacity_kw.is_finite() || self.capacity_kw <= 0.0 {
            return Err(invalid("capacity_kw", "must be greater than zero"));
        }
        project_life("project_life_years", self.project_life_years)?;
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(invalid("discount_rate", "must be greater than -1"));
        }
        non_negative("annual_om_cost", self.annual_om_cost)?;
        non_negative("fuel_cost", self.fuel_cost)?;
        fraction("capacity_factor", self.capacity_factor)?;
        if !self.annual_degradation.is_finite()
            || !(0.0..1.0).contains(&self.annual_degradation)
        {
            return Err(invalid("annual_degradation", "must be in [0, 1)"));
        }

        if let Some(capacity) = self.battery_capacity_kwh {
            non_negative("battery_capacity_kwh", capacity)?;
        }
        if let Some(efficiency) = self.battery_round_trip_efficiency {
            if !efficiency.is_finite() || efficiency <= 0.0 || efficiency > 1.0 {
                return Err(invalid("battery_round_trip_efficiency", "must be in (0, 1]"));
            }
        }
        if let Some(year) = self.battery_replacement_year {
            if year == 0 || year > self.project_life_years {
                return Err(invalid(
                    "battery_replacement_year",
                    "must fall within the project life",
                ));
            }
        }
        if let Some(cost) = self.battery_replacement_cost {
            non_negative("battery_replacement_cost", cost)?;
        }
        if let Some(rate) = self.tax_rate {
            fraction("tax_rate", rate)?;
        }
        if let Some(credit) = self.investment_tax_credit {
            fraction("investment_tax_credit", credit)?;
        }
        if let Some(credit) = self.production_tax_credit {
            non_negative("production_tax_credit", credit)?;
        }
        if let Some(factor) = self.carbon_emissions_factor {
            non_negative("carbon_emissions_factor", factor)?;
        }
        if let Some(price) = self.carbon_price {
            non_negative("carbon_price", price)?;
        }
        Ok(())
    }

    /// Undegraded first-year production in MWh.
    pub fn first_year_energy_mwh(&self) -> f64 {
        self.capacity_kw * self.capacity_factor * HOURS_PER_YEAR / 1000.0
    }
}

/// Inputs for the simplified levelized cost of hydrogen.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HydrogenCostInputs {
    pub electrolyzer_capacity_kw: f64,
    pub capacity_factor: f64,
    /// Electricity consumed per kilogram of hydrogen.
    pub electrolyzer_consumption_kwh_per_kg: f64,
    /// Currency per MWh of electricity, typically the LCOE of the supplying plant.
    pub electricity_price: f64,
    pub capital_cost: f64,
    pub annual_om_cost: f64,
    pub project_life_years: u32,
    pub discount_rate: f64,
    /// Currency per kilogram of hydrogen.
    pub water_cost_per_kg: Option<f64>,
}

impl HydrogenCostInputs {
    pub fn validate(&self) -> Result<(), LevelizedCostError> {
        if !self.electrolyzer_capacity_kw.is_finite() || self.electrolyzer_capacity_kw <= 0.0 {
            return Err(invalid("electrolyzer_capacity_kw", "must be greater than zero"));
        }
        fraction("capacity_factor", self.capacity_factor)?;
        if !self.electrolyzer_consumption_kwh_per_kg.is_finite()
            || self.electrolyzer_consumption_kwh_per_kg <= 0.0
        {
            return Err(invalid(
                "electrolyzer_consumption_kwh_per_kg",
                "must be greater than zero",
            ));
        }
        non_negative("electricity_price", self.electricity_price)?;
        non_negative("capital_cost", self.capital_cost)?;
        non_negative("annual_om_cost", self.annual_om_cost)?;
        project_life("project_life_years", self.project_life_years)?;
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(invalid("discount_rate", "must be greater than -1"));
        }
        if let Some(cost) = self.water_cost_per_kg {
            non_negative("water_cost_per_kg", cost)?;
        }
        Ok(())
    }

    pub fn annual_hydrogen_kg(&self) -> f64 {
        let annual_energy_kwh = self.electrolyzer_capacity_kw * self.capacity_factor * HOURS_PER_YEAR;
        annual_energy_kwh / self.electrolyzer_consumption_kwh_per_kg
    }
}

fn invalid(field: &'static str, reason: &str) -> LevelizedCostError {
    LevelizedCostError::InvalidInput {
        field,
        reason: reason.to_string(),
    }
}

fn project_life(field: &'static str, years: u32) -> Result<(), LevelizedCostError> {
    if years == 0 || years > MAX_PROJECT_LIFE_YEARS {
        return Err(invalid(field, "must be between 1 and 100 years"));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), LevelizedCostError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a finite, non-negative number"));
    }
    Ok(())
}

fn fraction(field: &'static str, value: f64) -> Result<(), LevelizedCostError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid(field, "must be in [0, 1]"));
    }
    Ok(())
}
