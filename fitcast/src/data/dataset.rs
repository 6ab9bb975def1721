#[cfg(test)]
#[path = "../../tests/unit/data/dataset_test.rs"]
mod dataset_test;

use super::Observation;
use crate::runtime::{Cluster, Partitioned};
use crate::utils::{EvaluationError, EvaluationResult, map_reduce};

/// An immutable, partitioned and cached collection of observations which is established once per
/// training run and reused by every candidate evaluation.
///
/// Partitioning is decided only here: a different partition count requires a new handle.
pub struct DatasetHandle {
    observations: Partitioned<Observation>,
    input_count: usize,
    output_count: usize,
}

impl DatasetHandle {
    /// Creates a new dataset handle materialized on the cluster. When `partition_count` is None,
    /// the cluster's default parallelism is used.
    ///
    /// Fails when there are no observations, partition count is zero or observations have
    /// different arities.
    pub fn create<R>(
        cluster: &R,
        observations: Vec<Observation>,
        partition_count: Option<usize>,
    ) -> EvaluationResult<Self>
    where
        R: Cluster,
    {
        let first = observations.first().ok_or(EvaluationError::EmptyDataset)?;
        let (input_count, output_count) = (first.input_count(), first.output_count());

        let mismatches = map_reduce(
            observations.as_slice(),
            |observation| {
                usize::from(observation.input_count() != input_count || observation.output_count() != output_count)
            },
            || 0,
            |a, b| a + b,
        );

        if mismatches > 0 {
            return Err(EvaluationError::configuration(format!(
                "{mismatches} observation(s) have arity different from inputs: {input_count}, outputs: {output_count}"
            )));
        }

        let observations = cluster.parallelize(observations, partition_count)?;

        Ok(Self { observations, input_count, output_count })
    }

    /// Returns the first observation of the first non-empty partition.
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Returns an amount of partitions.
    pub fn partition_count(&self) -> usize {
        self.observations.partition_count()
    }

    /// Returns a total amount of observations.
    pub fn size(&self) -> usize {
        self.observations.len()
    }

    /// Returns input arity shared by all observations.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Returns output arity shared by all observations. Tree based engines use it as amount of
    /// trees per solution.
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// Returns partitioned observations.
    pub fn observations(&self) -> &Partitioned<Observation> {
        &self.observations
    }
}
