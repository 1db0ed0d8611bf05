use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::metric::OutcomeMetric;
use crate::services::normal_sampler::{BoxMuller, NormalParameterError};
use crate::services::percentiles::{sorted_copy, value_sorted};
use crate::services::simulation_types::{
    ConfidenceInterval, MetricSimulation, MetricSummary, PercentileSet, ProbabilityStatistic,
    SimulationResult, SimulationVariable,
};

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("no simulation variables were given")]
    NoVariables,
    #[error("metric {0} is listed more than once")]
    DuplicateMetric(&'static str),
    #[error("invalid distribution for {metric}: {source}")]
    InvalidDistribution {
        metric: &'static str,
        #[source]
        source: NormalParameterError,
    },
}

/// Runs the simulation with the thread-local generator.
pub fn run_simulation(
    variables: &[SimulationVariable],
    iterations: usize,
) -> Result<SimulationResult, SimulationError> {
    let mut rng = rand::thread_rng();
    run_simulation_with_rng(variables, iterations, &mut rng)
}

/// Runs the simulation with a generator seeded from `seed`, so the same seed
/// reproduces the same samples.
pub fn run_simulation_seeded(
    variables: &[SimulationVariable],
    iterations: usize,
    seed: u64,
) -> Result<SimulationResult, SimulationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut result = run_simulation_with_rng(variables, iterations, &mut rng)?;
    result.seed = Some(seed);
    Ok(result)
}

/// Draws `iterations` independent samples per metric and summarises them.
///
/// Within one iteration metrics are drawn in the order given, each from its
/// own normal distribution; no correlation between metrics is modelled.
pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    variables: &[SimulationVariable],
    iterations: usize,
    rng: &mut R,
) -> Result<SimulationResult, SimulationError> {
    if iterations == 0 {
        return Err(SimulationError::InvalidIterations);
    }
    if variables.is_empty() {
        return Err(SimulationError::NoVariables);
    }

    let mut seen = HashSet::with_capacity(variables.len());
    let mut distributions = Vec::with_capacity(variables.len());
    for variable in variables {
        if !seen.insert(variable.metric) {
            return Err(SimulationError::DuplicateMetric(variable.metric.name()));
        }
        let distribution = BoxMuller::new(variable.mean, variable.std_dev).map_err(|source| {
            SimulationError::InvalidDistribution {
                metric: variable.metric.name(),
                source,
            }
        })?;
        distributions.push(distribution);
    }

    info!(iterations, metrics = variables.len(), "Running Monte Carlo simulation");

    let mut samples: Vec<Vec<f64>> = (0..variables.len())
        .map(|_| Vec::with_capacity(iterations))
        .collect();
    for _ in 0..iterations {
        for (distribution, metric_samples) in distributions.iter().zip(samples.iter_mut()) {
            metric_samples.push(distribution.sample(rng));
        }
    }

    let metrics = variables
        .iter()
        .zip(samples)
        .map(|(variable, samples)| {
            let summary = summarize_samples(&samples);
            let probability = probability_statistic(variable.metric, &samples);
            debug!(
                metric = variable.metric.name(),
                mean = summary.mean,
                probability = probability.probability,
                "Summarised metric"
            );
            MetricSimulation {
                metric: variable.metric,
                input_mean: variable.mean,
                input_std_dev: variable.std_dev,
                summary,
                probability,
                samples,
            }
        })
        .collect();

    Ok(SimulationResult {
        iterations,
        seed: None,
        metrics,
    })
}

/// Mean, population standard deviation, range, percentiles and the 95%
/// interval of a non-empty sample set.
pub fn summarize_samples(samples: &[f64]) -> MetricSummary {
    let sorted = sorted_copy(samples);
    let count = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / count;
    let variance = sorted
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;

    let at = |fraction: f64| value_sorted(&sorted, fraction).unwrap_or(f64::NAN);

    MetricSummary {
        mean,
        std_dev: variance.sqrt(),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        max: sorted.last().copied().unwrap_or(f64::NAN),
        percentiles: PercentileSet {
            p10: at(0.10),
            p25: at(0.25),
            p50: at(0.50),
            p75: at(0.75),
            p90: at(0.90),
        },
        confidence_interval: ConfidenceInterval {
            lower: at(0.025),
            upper: at(0.975),
        },
    }
}

fn probability_statistic(metric: OutcomeMetric, samples: &[f64]) -> ProbabilityStatistic {
    let (comparison, threshold) = metric.success_threshold();
    let successes = samples.iter().filter(|value| metric.is_success(**value)).count();
    ProbabilityStatistic {
        comparison,
        threshold,
        probability: successes as f64 / samples.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(metric: OutcomeMetric, mean: f64, std_dev: f64) -> SimulationVariable {
        SimulationVariable {
            metric,
            mean,
            std_dev,
        }
    }

    fn standard_set() -> Vec<SimulationVariable> {
        vec![
            variable(OutcomeMetric::Npv, 250_000.0, 100_000.0),
            variable(OutcomeMetric::Irr, 0.12, 0.02),
            variable(OutcomeMetric::PaybackPeriod, 6.0, 1.0),
            variable(OutcomeMetric::DebtServiceCoverage, 1.35, 0.15),
            variable(OutcomeMetric::EquityMultiple, 2.1, 0.3),
        ]
    }

    #[test]
    fn produces_exactly_the_requested_sample_count() {
        let result = run_simulation_seeded(&standard_set(), 1000, 1).unwrap();
        assert_eq!(result.iterations, 1000);
        assert_eq!(result.metrics.len(), 5);
        for metric in &result.metrics {
            assert_eq!(metric.samples.len(), 1000);
        }
    }

    #[test]
    fn every_metric_buffer_is_sized_up_front() {
        let result = run_simulation_seeded(&standard_set(), 1000, 2).unwrap();
        for metric in &result.metrics {
            // A buffer grown by doubling would end at 1024.
            assert_eq!(metric.samples.capacity(), 1000, "{}", metric.metric.name());
        }
    }

    #[test]
    fn single_iteration_degenerates_percentiles() {
        let result = run_simulation_seeded(&standard_set(), 1, 3).unwrap();
        for metric in &result.metrics {
            let sample = metric.samples[0];
            let summary = &metric.summary;
            assert_eq!(metric.samples.len(), 1);
            assert_eq!(summary.min, sample);
            assert_eq!(summary.max, sample);
            assert_eq!(summary.percentiles.p10, sample);
            assert_eq!(summary.percentiles.p90, sample);
            assert_eq!(summary.confidence_interval.lower, sample);
            assert_eq!(summary.confidence_interval.upper, sample);
            assert_eq!(summary.std_dev, 0.0);
        }
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert_eq!(
            run_simulation(&standard_set(), 0),
            Err(SimulationError::InvalidIterations)
        );
    }

    #[test]
    fn empty_variable_list_is_rejected() {
        assert_eq!(run_simulation(&[], 10), Err(SimulationError::NoVariables));
    }

    #[test]
    fn duplicate_metrics_are_rejected() {
        let variables = vec![
            variable(OutcomeMetric::Npv, 1.0, 1.0),
            variable(OutcomeMetric::Npv, 2.0, 1.0),
        ];
        assert_eq!(
            run_simulation(&variables, 10),
            Err(SimulationError::DuplicateMetric("npv"))
        );
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        let variables = vec![variable(OutcomeMetric::Irr, 0.1, -0.01)];
        assert!(matches!(
            run_simulation(&variables, 10),
            Err(SimulationError::InvalidDistribution { metric: "irr", .. })
        ));
    }

    #[test]
    fn sample_mean_converges_for_most_seeds() {
        let iterations = 5000;
        let bound = 3.0 * 10.0 / (iterations as f64).sqrt();
        let variables = vec![variable(OutcomeMetric::Npv, 100.0, 10.0)];

        let within = (0..5_u64)
            .filter(|seed| {
                let result = run_simulation_seeded(&variables, iterations, *seed).unwrap();
                (result.metrics[0].summary.mean - 100.0).abs() <= bound
            })
            .count();
        assert!(within >= 4, "only {within} of 5 seeded runs converged");
    }

    #[test]
    fn confidence_interval_is_ordered_and_inside_range() {
        let result = run_simulation_seeded(&standard_set(), 2000, 11).unwrap();
        for metric in &result.metrics {
            let summary = &metric.summary;
            let interval = summary.confidence_interval;
            assert!(interval.lower <= interval.upper);
            assert!(summary.min <= interval.lower);
            assert!(interval.upper <= summary.max);
            assert!(summary.percentiles.p10 <= summary.percentiles.p50);
            assert!(summary.percentiles.p50 <= summary.percentiles.p90);
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let first = run_simulation_seeded(&standard_set(), 50, 42).unwrap();
        let second = run_simulation_seeded(&standard_set(), 50, 42).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, Some(42));
    }

    #[test]
    fn degenerate_distribution_gives_certain_probabilities() {
        let variables = vec![
            variable(OutcomeMetric::Npv, 10.0, 0.0),
            variable(OutcomeMetric::PaybackPeriod, 7.0, 0.0),
        ];
        let result = run_simulation_seeded(&variables, 20, 5).unwrap();
        let npv = &result.metrics[0];
        let payback = &result.metrics[1];
        assert_eq!(payback.metric, OutcomeMetric::PaybackPeriod);
        assert_eq!(npv.probability.probability, 1.0);
        assert_eq!(payback.probability.probability, 0.0);
        assert_eq!(npv.summary.mean, 10.0);
    }

    #[test]
    fn summarize_samples_uses_floor_indexing() {
        let samples: Vec<f64> = (0..10).rev().map(f64::from).collect();
        let summary = summarize_samples(&samples);
        assert_eq!(summary.mean, 4.5);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.percentiles.p10, 1.0);
        assert_eq!(summary.percentiles.p25, 2.0);
        assert_eq!(summary.percentiles.p50, 5.0);
        assert_eq!(summary.percentiles.p75, 7.0);
        assert_eq!(summary.percentiles.p90, 9.0);
        assert_eq!(summary.confidence_interval.lower, 0.0);
        assert_eq!(summary.confidence_interval.upper, 9.0);
    }
}
