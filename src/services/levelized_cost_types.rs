use serde::Serialize;

/// LCOE and its approximate decomposition, all in currency per MWh.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LcoeBreakdown {
    pub total_lcoe: f64,
    pub capital_component: f64,
    pub o_and_m_component: f64,
    pub fuel_component: f64,
    pub tax_component: f64,
    pub incentive_component: f64,
    pub carbon_component: f64,
    pub discounted_energy_mwh: f64,
    pub npv_costs: f64,
}

impl LcoeBreakdown {
    /// False when the plant produces no discounted energy.
    pub fn is_defined(&self) -> bool {
        self.total_lcoe.is_finite()
    }

    pub fn component_sum(&self) -> f64 {
        self.capital_component
            + self.o_and_m_component
            + self.fuel_component
            + self.tax_component
            + self.incentive_component
    }
}

/// LCOH and its components, all in currency per kilogram.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LcohBreakdown {
    pub total_lcoh: f64,
    pub electricity_component: f64,
    pub capital_component: f64,
    pub o_and_m_component: f64,
    pub water_component: f64,
    pub annual_hydrogen_kg: f64,
}

impl LcohBreakdown {
    pub fn is_defined(&self) -> bool {
        self.total_lcoh.is_finite()
    }
}
