use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalysisVariableError {
    #[error("variable id must not be empty")]
    MissingId,
    #[error("variable {0}: values must be finite")]
    NonFinite(String),
    #[error("variable {id}: minimum {min} is above the base value {base}")]
    MinAboveBase { id: String, min: f64, base: f64 },
    #[error("variable {id}: base value {base} is above the maximum {max}")]
    BaseAboveMax { id: String, base: f64, max: f64 },
    #[error("variable {0}: percentage range must not be negative")]
    NegativePercentage(String),
}

/// Classification used to pick a sensitivity weighting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VariableMetric {
    Cost,
    Schedule,
    Performance,
    Revenue,
    Other,
}

/// How far a variable is perturbed in each direction.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VariableRange {
    Absolute { min_value: f64, max_value: f64 },
    /// Both magnitudes are non-negative: the downside is `-min_percentage`.
    Percentage {
        min_percentage: f64,
        max_percentage: f64,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisVariable {
    id: String,
    name: String,
    base_value: f64,
    range: VariableRange,
    category: String,
    metric: VariableMetric,
}

impl AnalysisVariable {
    /// Builds a variable, enforcing `min <= base <= max` for absolute ranges.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_value: f64,
        range: VariableRange,
        category: impl Into<String>,
        metric: VariableMetric,
    ) -> Result<Self, AnalysisVariableError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AnalysisVariableError::MissingId);
        }
        if !base_value.is_finite() {
            return Err(AnalysisVariableError::NonFinite(id));
        }

        match range {
            VariableRange::Absolute {
                min_value,
                max_value,
            } => {
                if !min_value.is_finite() || !max_value.is_finite() {
                    return Err(AnalysisVariableError::NonFinite(id));
                }
                if min_value > base_value {
                    return Err(AnalysisVariableError::MinAboveBase {
                        id,
                        min: min_value,
                        base: base_value,
                    });
                }
                if base_value > max_value {
                    return Err(AnalysisVariableError::BaseAboveMax {
                        id,
                        base: base_value,
                        max: max_value,
                    });
                }
            }
            VariableRange::Percentage {
                min_percentage,
                max_percentage,
            } => {
                if !min_percentage.is_finite() || !max_percentage.is_finite() {
                    return Err(AnalysisVariableError::NonFinite(id));
                }
                if min_percentage < 0.0 || max_percentage < 0.0 {
                    return Err(AnalysisVariableError::NegativePercentage(id));
                }
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            base_value,
            range,
            category: category.into(),
            metric,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn range(&self) -> VariableRange {
        self.range
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn metric(&self) -> VariableMetric {
        self.metric
    }

    /// Downside and upside as non-negative percentages of the base value.
    ///
    /// Absolute bounds are measured against `|base_value|`; a zero base has no
    /// meaningful percentage and maps to `(0, 0)`.
    pub fn percentage_range(&self) -> (f64, f64) {
        match self.range {
            VariableRange::Percentage {
                min_percentage,
                max_percentage,
            } => (min_percentage, max_percentage),
            VariableRange::Absolute {
                min_value,
                max_value,
            } => {
                let base = self.base_value.abs();
                if base == 0.0 {
                    return (0.0, 0.0);
                }
                (
                    (self.base_value - min_value) / base * 100.0,
                    (max_value - self.base_value) / base * 100.0,
                )
            }
        }
    }
}
