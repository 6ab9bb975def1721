use crate::data::{DatasetHandle, Observation};
use crate::evaluation::{ScoringFn, create_scoring_fn};
use crate::runtime::LocalCluster;
use crate::utils::Float;
use std::sync::Arc;

/// Creates a local cluster with a few threads.
pub fn create_test_cluster() -> Arc<LocalCluster> {
    Arc::new(LocalCluster::with_threads(4).expect("cannot create test cluster"))
}

/// Creates observations which have a single input equal to the given value and a single output.
pub fn create_valued_observations(values: &[Float]) -> Vec<Observation> {
    values.iter().map(|value| Observation::new(vec![*value], vec![0.])).collect()
}

/// Creates observations sampled from `y = slope * x + intercept` on `[0, size)` grid.
pub fn create_linear_observations(size: usize, slope: Float, intercept: Float) -> Vec<Observation> {
    (0..size)
        .map(|idx| {
            let x = idx as Float / 10.;
            Observation::new(vec![x], vec![slope * x + intercept])
        })
        .collect()
}

/// Creates a dataset on the given cluster.
pub fn create_test_dataset(
    cluster: &LocalCluster,
    observations: Vec<Observation>,
    partition_count: Option<usize>,
) -> DatasetHandle {
    DatasetHandle::create(cluster, observations, partition_count).expect("cannot create test dataset")
}

/// Returns a scoring function which ignores candidate and returns the first input as a score.
pub fn create_input_scoring<C: 'static>() -> ScoringFn<C> {
    create_scoring_fn(|_, slot| Ok(slot.input(0)))
}
