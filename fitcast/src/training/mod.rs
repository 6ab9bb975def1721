//! The training module contains a thin driver which runs an external evolutionary engine
//! generation by generation using distributed cost evaluation as the engine's cost function.

#[cfg(test)]
#[path = "../../tests/unit/training/driver_test.rs"]
mod driver_test;

use crate::data::Observation;
use crate::evaluation::{CandidateCost, CandidatePreprocessing, DistributedCostEvaluator, ScoringFn};
use crate::runtime::Cluster;
use crate::utils::{Environment, EvaluationError, EvaluationResult, Float, Timer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

mod config;
pub use self::config::*;

mod telemetry;
pub use self::telemetry::*;

/// An external evolutionary engine which owns population, operators and termination criteria.
/// The engine calls back into evaluation only to get a cost of a candidate.
pub trait EvolutionEngine {
    /// A candidate type.
    type Candidate: Clone;

    /// Creates an initial population.
    fn initialize(&mut self, cost: &dyn CandidateCost<Candidate = Self::Candidate>) -> EvaluationResult<()>;

    /// Advances evolution by one generation.
    fn evolve(&mut self, cost: &dyn CandidateCost<Candidate = Self::Candidate>) -> EvaluationResult<()>;

    /// Returns true when evolution should stop.
    fn is_terminated(&self) -> bool;

    /// Returns current generation index.
    fn generation(&self) -> usize;

    /// Returns current population size.
    fn population_size(&self) -> usize;

    /// Returns the best candidate found so far with its cost.
    fn global_best(&self) -> Option<(&Self::Candidate, Float)>;

    /// Returns the best cost within current generation.
    fn current_cost(&self) -> Option<Float>;
}

/// A result of a training run.
pub struct TrainingResult<C> {
    /// The best candidate found.
    pub best: C,
    /// A cost of the best candidate.
    pub cost: Float,
    /// Collected metrics, if telemetry is configured to collect them.
    pub metrics: Option<TelemetryMetrics>,
}

/// Runs an evolutionary engine until it terminates, evaluating candidates on a cluster.
pub struct TrainingDriver<R, C>
where
    R: Cluster,
    C: Clone,
{
    evaluator: DistributedCostEvaluator<R, C>,
    config: TrainingConfig,
    environment: Arc<Environment>,
}

impl<R, C> TrainingDriver<R, C>
where
    R: Cluster,
    C: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates a new instance of `TrainingDriver`.
    pub fn new(cluster: Arc<R>, scoring: ScoringFn<C>, config: TrainingConfig, environment: Arc<Environment>) -> Self {
        let evaluator = DistributedCostEvaluator::new(cluster, scoring, config.reduction);

        Self { evaluator, config, environment }
    }

    /// Sets a candidate pre-processing hook applied before each evaluation.
    pub fn with_preprocessing(mut self, preprocessing: Arc<dyn CandidatePreprocessing<Candidate = C>>) -> Self {
        self.evaluator = self.evaluator.with_preprocessing(preprocessing);
        self
    }

    /// Returns cost evaluator used by the driver.
    pub fn evaluator(&self) -> &DistributedCostEvaluator<R, C> {
        &self.evaluator
    }

    /// Caches observations on the cluster and runs the engine until it terminates. Returns the
    /// best candidate found by the engine.
    pub fn fit<E>(&mut self, engine: &mut E, observations: Vec<Observation>) -> EvaluationResult<TrainingResult<C>>
    where
        E: EvolutionEngine<Candidate = C>,
    {
        let mut telemetry = Telemetry::new(self.config.telemetry_mode(self.environment.logger.clone()));

        self.evaluator.set_dataset(observations, self.config.partition_count)?;
        if let Some(dataset) = self.evaluator.dataset() {
            telemetry.on_dataset(dataset);
        }

        let evaluator = &self.evaluator;
        let (result, duration) = Timer::measure_duration(|| engine.initialize(evaluator));
        result?;
        telemetry.on_initial(engine.population_size(), duration);

        while !engine.is_terminated() {
            engine.evolve(evaluator)?;
            telemetry.on_generation(GenerationReport::new(&*engine, telemetry.elapsed_secs()));
        }

        let (best, cost) = engine
            .global_best()
            .map(|(best, cost)| (best.clone(), cost))
            .ok_or_else(|| EvaluationError::configuration("engine has no best candidate after training"))?;

        telemetry.on_result(engine.generation(), cost);

        Ok(TrainingResult { best, cost, metrics: telemetry.take_metrics() })
    }
}
