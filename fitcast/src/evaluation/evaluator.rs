#[cfg(test)]
#[path = "../../tests/unit/evaluation/evaluator_test.rs"]
mod evaluator_test;

use super::*;
use crate::data::{DatasetHandle, Observation};
use crate::runtime::Cluster;
use crate::utils::EvaluationError;
use serde::de::DeserializeOwned;

/// Evaluates a cost of the candidate against every observation of the dataset using cluster
/// parallel execution.
///
/// The candidate is pre-processed once, broadcast, scored per observation inside partitions and
/// scores are combined according to the reduction mode. A failure of the scoring function for any
/// observation fails the whole evaluation.
pub fn evaluate_cost<R, C>(
    cluster: &R,
    dataset: &DatasetHandle,
    candidate: &C,
    preprocessing: &(dyn CandidatePreprocessing<Candidate = C>),
    scoring: &ScoringFn<C>,
    reduction: ReductionMode,
) -> EvaluationResult<Float>
where
    R: Cluster,
    C: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let candidate = preprocessing.pre_process(candidate);
    let candidate: &C = &candidate;
    let observations = dataset.observations();

    let score = |candidate: &C, observation: &Observation| {
        observation.with_slot(|slot| scoring.as_ref()(candidate, slot)).map_err(EvaluationError::Scoring)
    };

    match reduction {
        ReductionMode::Sum => {
            let total = distributed_aggregate(cluster, observations, candidate, score, |a, b| a + b)?;

            Ok(total.unwrap_or(0.))
        }
        ReductionMode::Mean => {
            let aggregate = distributed_aggregate(
                cluster,
                observations,
                candidate,
                |candidate, observation| score(candidate, observation).map(MeanAggregate::single),
                MeanAggregate::merge,
            )?;

            aggregate.ok_or(EvaluationError::EmptyDataset).and_then(|aggregate| aggregate.mean())
        }
    }
}

/// A cost function adapter for an evolutionary engine which owns a cached dataset for one
/// training run and evaluates candidates on a cluster.
pub struct DistributedCostEvaluator<R, C>
where
    R: Cluster,
    C: Clone,
{
    cluster: Arc<R>,
    dataset: Option<DatasetHandle>,
    scoring: ScoringFn<C>,
    reduction: ReductionMode,
    preprocessing: Arc<dyn CandidatePreprocessing<Candidate = C>>,
}

impl<R, C> DistributedCostEvaluator<R, C>
where
    R: Cluster,
    C: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates a new instance of `DistributedCostEvaluator` which evaluates candidates as they are.
    pub fn new(cluster: Arc<R>, scoring: ScoringFn<C>, reduction: ReductionMode) -> Self {
        Self {
            cluster,
            dataset: None,
            scoring,
            reduction,
            preprocessing: Arc::new(IdentityPreprocessing::<C>::default()),
        }
    }

    /// Sets a candidate pre-processing hook.
    pub fn with_preprocessing(mut self, preprocessing: Arc<dyn CandidatePreprocessing<Candidate = C>>) -> Self {
        self.preprocessing = preprocessing;
        self
    }

    /// Creates and caches a dataset discarding the previous one.
    pub fn set_dataset(
        &mut self,
        observations: Vec<Observation>,
        partition_count: Option<usize>,
    ) -> EvaluationResult<()> {
        self.dataset = Some(DatasetHandle::create(self.cluster.as_ref(), observations, partition_count)?);

        Ok(())
    }

    /// Returns current dataset if it is set.
    pub fn dataset(&self) -> Option<&DatasetHandle> {
        self.dataset.as_ref()
    }

    /// Returns underlying cluster.
    pub fn cluster(&self) -> &R {
        self.cluster.as_ref()
    }

    /// Returns reduction mode.
    pub fn reduction(&self) -> ReductionMode {
        self.reduction
    }

    /// Evaluates a cost of the candidate against current dataset.
    pub fn evaluate_cost(&self, candidate: &C) -> EvaluationResult<Float> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| EvaluationError::configuration("dataset is not set before evaluation"))?;

        evaluate_cost(
            self.cluster.as_ref(),
            dataset,
            candidate,
            self.preprocessing.as_ref(),
            &self.scoring,
            self.reduction,
        )
    }
}

impl<R, C> CandidateCost for DistributedCostEvaluator<R, C>
where
    R: Cluster,
    C: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Candidate = C;

    fn cost(&self, candidate: &Self::Candidate) -> EvaluationResult<Float> {
        self.evaluate_cost(candidate)
    }
}
