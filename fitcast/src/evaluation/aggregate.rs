#[cfg(test)]
#[path = "../../tests/unit/evaluation/aggregate_test.rs"]
mod aggregate_test;

use crate::runtime::{Cluster, Partitioned};
use crate::utils::{EvaluationError, EvaluationResult, Float};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A partial (sum, count) pair used to compute a mean.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAggregate {
    /// A sum of scores.
    pub sum: Float,
    /// An amount of scores.
    pub count: usize,
}

impl MeanAggregate {
    /// Creates an aggregate of a single score.
    pub fn single(score: Float) -> Self {
        Self { sum: score, count: 1 }
    }

    /// Combines two aggregates component-wise.
    pub fn merge(self, other: Self) -> Self {
        Self { sum: self.sum + other.sum, count: self.count + other.count }
    }

    /// Returns mean value or error if there were no scores.
    pub fn mean(&self) -> EvaluationResult<Float> {
        if self.count == 0 {
            return Err(EvaluationError::EmptyDataset);
        }

        Ok(self.sum / self.count as Float)
    }
}

/// Broadcasts a value, maps every item of the partitioned collection together with the value and
/// reduces results with the combiner.
///
/// The broadcast is released before returning on every path. Map results are combined in
/// collection order using a tree which shape does not depend on partitioning, so the result is
/// the same for any partition count. The first failure in partition order aborts aggregation.
/// Returns None when the collection is empty.
pub fn distributed_aggregate<R, T, B, P, FM, FC>(
    cluster: &R,
    collection: &Partitioned<T>,
    value: &B,
    map_op: FM,
    combine_op: FC,
) -> EvaluationResult<Option<P>>
where
    R: Cluster,
    T: Send + Sync,
    B: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    P: Send,
    FM: Fn(&B, &T) -> EvaluationResult<P> + Send + Sync,
    FC: Fn(P, P) -> P + Send + Sync,
{
    let broadcast = cluster.broadcast(value)?;

    let partials = cluster.map_partitions(collection, |_, items| {
        if items.is_empty() {
            return Ok(vec![]);
        }

        let value = broadcast.value()?;

        items.iter().map(|item| map_op(value.as_ref(), item)).collect::<EvaluationResult<Vec<_>>>()
    });

    let partials = partials.into_iter().collect::<EvaluationResult<Vec<_>>>()?;
    let result = cluster.reduce(partials.into_iter().flatten().collect(), combine_op);

    broadcast.destroy();

    Ok(result)
}
