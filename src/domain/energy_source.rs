use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::project_inputs::ProjectCostInputs;

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Solar,
    Wind,
    Battery,
    Hybrid,
}

impl EnergySource {
    pub const ALL: [EnergySource; 4] = [
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::Battery,
        EnergySource::Hybrid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EnergySource::Solar => "solar",
            EnergySource::Wind => "wind",
            EnergySource::Battery => "battery",
            EnergySource::Hybrid => "hybrid",
        }
    }

    /// Starting parameter set for a 1 MW class project of this source.
    /// The source only picks these numbers; the LCOE formula is the same for all.
    pub fn defaults(self) -> ProjectCostInputs {
        match self {
            EnergySource::Solar => ProjectCostInputs {
                energy_source: self,
                initial_investment: 1_000_000.0,
                capacity_kw: 1000.0,
                project_life_years: 25,
                discount_rate: 0.08,
                annual_om_cost: 15_000.0,
                fuel_cost: 0.0,
                capacity_factor: 0.25,
                annual_degradation: 0.005,
                battery_capacity_kwh: None,
                battery_round_trip_efficiency: None,
                battery_replacement_year: None,
                battery_replacement_cost: None,
                tax_rate: None,
                investment_tax_credit: Some(0.26),
                production_tax_credit: None,
                carbon_emissions_factor: None,
                carbon_price: None,
            },
            EnergySource::Wind => ProjectCostInputs {
                energy_source: self,
                initial_investment: 1_500_000.0,
                capacity_kw: 1000.0,
                project_life_years: 25,
                discount_rate: 0.08,
                annual_om_cost: 30_000.0,
                fuel_cost: 0.0,
                capacity_factor: 0.35,
                annual_degradation: 0.005,
                battery_capacity_kwh: None,
                battery_round_trip_efficiency: None,
                battery_replacement_year: None,
                battery_replacement_cost: None,
                tax_rate: None,
                investment_tax_credit: None,
                production_tax_credit: Some(25.0),
                carbon_emissions_factor: None,
                carbon_price: None,
            },
            // Fuel cost stands in for the price of charging energy.
            EnergySource::Battery => ProjectCostInputs {
                energy_source: self,
                initial_investment: 800_000.0,
                capacity_kw: 1000.0,
                project_life_years: 15,
                discount_rate: 0.08,
                annual_om_cost: 10_000.0,
                fuel_cost: 30.0,
                capacity_factor: 0.15,
                annual_degradation: 0.02,
                battery_capacity_kwh: Some(4000.0),
                battery_round_trip_efficiency: Some(0.85),
                battery_replacement_year: Some(10),
                battery_replacement_cost: Some(300_000.0),
                tax_rate: None,
                investment_tax_credit: Some(0.30),
                production_tax_credit: None,
                carbon_emissions_factor: None,
                carbon_price: None,
            },
            EnergySource::Hybrid => ProjectCostInputs {
                energy_source: self,
                initial_investment: 2_000_000.0,
                capacity_kw: 1500.0,
                project_life_years: 25,
                discount_rate: 0.08,
                annual_om_cost: 35_000.0,
                fuel_cost: 0.0,
                capacity_factor: 0.30,
                annual_degradation: 0.005,
                battery_capacity_kwh: Some(2000.0),
                battery_round_trip_efficiency: Some(0.88),
                battery_replacement_year: Some(12),
                battery_replacement_cost: Some(250_000.0),
                tax_rate: None,
                investment_tax_credit: Some(0.26),
                production_tax_credit: None,
                carbon_emissions_factor: None,
                carbon_price: None,
            },
        }
    }
}
