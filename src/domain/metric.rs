use serde::{Deserialize, Serialize};

/// Project outcome metrics that can be sampled in a Monte Carlo run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeMetric {
    Npv,
    Irr,
    PaybackPeriod,
    DebtServiceCoverage,
    EquityMultiple,
}

/// Direction of the threshold a probability statistic counts against.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

impl OutcomeMetric {
    pub fn name(self) -> &'static str {
        match self {
            OutcomeMetric::Npv => "npv",
            OutcomeMetric::Irr => "irr",
            OutcomeMetric::PaybackPeriod => "paybackPeriod",
            OutcomeMetric::DebtServiceCoverage => "debtServiceCoverage",
            OutcomeMetric::EquityMultiple => "equityMultiple",
        }
    }

    /// Success criterion used for the metric's probability statistic.
    pub fn success_threshold(self) -> (Comparison, f64) {
        match self {
            OutcomeMetric::Npv => (Comparison::GreaterThan, 0.0),
            OutcomeMetric::Irr => (Comparison::GreaterThan, 0.10),
            OutcomeMetric::PaybackPeriod => (Comparison::LessThan, 5.0),
            OutcomeMetric::DebtServiceCoverage => (Comparison::GreaterThan, 1.0),
            OutcomeMetric::EquityMultiple => (Comparison::GreaterThan, 2.0),
        }
    }

    pub fn is_success(self, value: f64) -> bool {
        match self.success_threshold() {
            (Comparison::GreaterThan, threshold) => value > threshold,
            (Comparison::LessThan, threshold) => value < threshold,
        }
    }
}

/// Output metric a sensitivity analysis is run against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetMetric {
    #[serde(rename = "NPV")]
    Npv,
    #[serde(rename = "IRR")]
    Irr,
    #[serde(rename = "Equity IRR")]
    EquityIrr,
    #[serde(rename = "Dividend Yield")]
    DividendYield,
    #[serde(rename = "DSCR")]
    Dscr,
    #[serde(rename = "LLCR")]
    Llcr,
    #[serde(rename = "PLCR")]
    Plcr,
    #[serde(rename = "LCOE")]
    Lcoe,
    #[serde(rename = "Payback Period")]
    PaybackPeriod,
}

impl TargetMetric {
    pub fn name(self) -> &'static str {
        match self {
            TargetMetric::Npv => "NPV",
            TargetMetric::Irr => "IRR",
            TargetMetric::EquityIrr => "Equity IRR",
            TargetMetric::DividendYield => "Dividend Yield",
            TargetMetric::Dscr => "DSCR",
            TargetMetric::Llcr => "LLCR",
            TargetMetric::Plcr => "PLCR",
            TargetMetric::Lcoe => "LCOE",
            TargetMetric::PaybackPeriod => "Payback Period",
        }
    }

    /// Ratio and percentage metrics whose raw impact is compressed by 0.1.
    pub fn is_proportional(self) -> bool {
        matches!(
            self,
            TargetMetric::Irr
                | TargetMetric::EquityIrr
                | TargetMetric::DividendYield
                | TargetMetric::Dscr
                | TargetMetric::Llcr
                | TargetMetric::Plcr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payback_period_succeeds_below_five_years() {
        assert!(OutcomeMetric::PaybackPeriod.is_success(4.9));
        assert!(!OutcomeMetric::PaybackPeriod.is_success(5.0));
    }

    #[test]
    fn npv_succeeds_strictly_above_zero() {
        assert!(!OutcomeMetric::Npv.is_success(0.0));
        assert!(OutcomeMetric::Npv.is_success(0.01));
    }

    #[test]
    fn ratio_metrics_are_proportional() {
        assert!(TargetMetric::Dscr.is_proportional());
        assert!(TargetMetric::EquityIrr.is_proportional());
        assert!(!TargetMetric::Npv.is_proportional());
        assert!(!TargetMetric::Lcoe.is_proportional());
    }

    #[test]
    fn target_metric_names_round_trip_through_yaml() {
        let metric: TargetMetric = serde_yaml::from_str("Equity IRR").unwrap();
        assert_eq!(metric, TargetMetric::EquityIrr);
        assert_eq!(metric.name(), "Equity IRR");
    }
}
