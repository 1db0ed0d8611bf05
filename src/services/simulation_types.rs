use serde::Serialize;

use crate::domain::metric::{Comparison, OutcomeMetric};

/// A metric and the normal distribution it is sampled from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationVariable {
    pub metric: OutcomeMetric,
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PercentileSet {
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

/// 95% interval bounded by the 2.5th and 97.5th percentiles.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProbabilityStatistic {
    pub comparison: Comparison,
    pub threshold: f64,
    pub probability: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: PercentileSet,
    pub confidence_interval: ConfidenceInterval,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MetricSimulation {
    pub metric: OutcomeMetric,
    pub input_mean: f64,
    pub input_std_dev: f64,
    pub summary: MetricSummary,
    pub probability: ProbabilityStatistic,
    /// Samples in draw order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub iterations: usize,
    pub seed: Option<u64>,
    pub metrics: Vec<MetricSimulation>,
}

impl SimulationResult {
    /// Drops the raw samples once only the summaries are needed.
    pub fn discard_samples(&mut self) {
        for entry in &mut self.metrics {
            entry.samples = Vec::new();
        }
    }
}
