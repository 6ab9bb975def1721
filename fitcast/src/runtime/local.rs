#[cfg(test)]
#[path = "../../tests/unit/runtime/local_test.rs"]
mod local_test;

use super::*;
use crate::utils::{Environment, EvaluationError, ThreadPool, parallel_collect, tree_reduce};
use std::sync::Arc;

/// An in-process cluster: partitions are processed by worker threads of a dedicated pool and
/// broadcast values are shared by reference through a registry.
pub struct LocalCluster {
    pool: ThreadPool,
    registry: Arc<BroadcastRegistry>,
}

impl LocalCluster {
    /// Creates a new instance of `LocalCluster` using amount of threads specified by environment.
    pub fn new(environment: &Environment) -> GenericResult<Self> {
        Self::with_threads(environment.get_threads())
    }

    /// Creates a new instance of `LocalCluster` with given amount of worker threads.
    pub fn with_threads(threads: usize) -> GenericResult<Self> {
        Ok(Self { pool: ThreadPool::new(threads.max(1))?, registry: Arc::new(BroadcastRegistry::default()) })
    }

    /// Returns broadcast registry which can be used to inspect broadcast lifecycle.
    pub fn broadcasts(&self) -> &BroadcastRegistry {
        self.registry.as_ref()
    }
}

impl Cluster for LocalCluster {
    fn default_parallelism(&self) -> usize {
        self.pool.threads()
    }

    fn parallelize<T>(&self, items: Vec<T>, partitions: Option<usize>) -> EvaluationResult<Partitioned<T>>
    where
        T: Send + Sync,
    {
        validate_partitions(partitions).map_err(EvaluationError::Configuration)?;

        Ok(Partitioned::new(items, partitions.unwrap_or_else(|| self.default_parallelism())))
    }

    fn broadcast<T>(&self, value: &T) -> EvaluationResult<Broadcast<T>>
    where
        T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        Ok(Broadcast::new(value, self.registry.clone()))
    }

    fn map_partitions<T, R, F>(&self, collection: &Partitioned<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        R: Send,
        F: Fn(PartitionId, &[T]) -> R + Send + Sync,
    {
        let partitions =
            collection.partitions().iter().map(|partition| partition.as_slice()).enumerate().collect::<Vec<_>>();

        self.pool.execute(|| parallel_collect(partitions.as_slice(), |(idx, items)| map_op(*idx, *items)))
    }

    fn reduce<R, F>(&self, items: Vec<R>, reduce_op: F) -> Option<R>
    where
        R: Send,
        F: Fn(R, R) -> R + Send + Sync,
    {
        self.pool.execute(|| tree_reduce(items, reduce_op))
    }
}
