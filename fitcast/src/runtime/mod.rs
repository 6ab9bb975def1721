//! The runtime module specifies the contract required from an underlying distributed-execution
//! runtime and provides its in-process implementation.
//!
//! The contract is intentionally small: ingest and partition records, broadcast a serializable
//! value and release it later, apply a function across all partitions in parallel and reduce
//! results with an associative combiner.

use crate::utils::{EvaluationResult, GenericResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod broadcast;
pub use self::broadcast::*;

mod local;
pub use self::local::*;

mod partitioned;
pub use self::partitioned::*;

/// A distributed-execution runtime which is able to run data-parallel jobs over partitioned
/// collections.
pub trait Cluster: Send + Sync {
    /// Returns an amount of partitions used when no explicit partition count is requested.
    fn default_parallelism(&self) -> usize;

    /// Ingests records, splits them into partitions and keeps them resident in memory.
    /// When `partitions` is None, the default parallelism is used.
    fn parallelize<T>(&self, items: Vec<T>, partitions: Option<usize>) -> EvaluationResult<Partitioned<T>>
    where
        T: Send + Sync;

    /// Makes the value readable by every partition. The value is released when returned handle
    /// is destroyed or dropped. A runtime which ships values between processes must restore them
    /// exactly, non-finite floats included.
    fn broadcast<T>(&self, value: &T) -> EvaluationResult<Broadcast<T>>
    where
        T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Applies the operation to every partition in parallel and returns results in partition order.
    fn map_partitions<T, R, F>(&self, collection: &Partitioned<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        R: Send,
        F: Fn(PartitionId, &[T]) -> R + Send + Sync;

    /// Reduces items with associative combiner. Returns None when there are no items.
    fn reduce<R, F>(&self, items: Vec<R>, reduce_op: F) -> Option<R>
    where
        R: Send,
        F: Fn(R, R) -> R + Send + Sync;
}

/// Validates requested partition count.
pub(crate) fn validate_partitions(partitions: Option<usize>) -> GenericResult<()> {
    match partitions {
        Some(0) => Err("partition count must be positive".into()),
        _ => Ok(()),
    }
}
