//! The evaluation module contains distributed, broadcast-based fitness evaluation: a candidate is
//! broadcast once, scored against every observation of a partitioned dataset in parallel and
//! partial scores are reduced into a single cost.

use crate::data::ObservationSlot;
use crate::utils::{EvaluationResult, Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod aggregate;
pub use self::aggregate::*;

mod evaluator;
pub use self::evaluator::*;

mod preprocessing;
pub use self::preprocessing::*;

/// A pure function which scores a candidate against one observation. It is allowed to write into
/// predicted outputs of the observation slot, but must not touch any shared state.
pub type ScoringFn<C> = Arc<dyn Fn(&C, &mut ObservationSlot<'_>) -> GenericResult<Float> + Send + Sync>;

/// Wraps a closure into a scoring function.
pub fn create_scoring_fn<C, F>(scoring: F) -> ScoringFn<C>
where
    F: Fn(&C, &mut ObservationSlot<'_>) -> GenericResult<Float> + Send + Sync + 'static,
{
    Arc::new(scoring)
}

/// Specifies how per-observation scores are combined into a single cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReductionMode {
    /// Scores are summed, e.g. when each score counts misclassifications.
    Sum,
    /// Scores are averaged, e.g. when each score is a squared error.
    #[default]
    Mean,
}

/// A cost function as seen by an evolutionary engine: the only way the engine calls into
/// the evaluation.
pub trait CandidateCost {
    /// A candidate type.
    type Candidate;

    /// Returns a cost of the candidate, lower is better.
    fn cost(&self, candidate: &Self::Candidate) -> EvaluationResult<Float>;
}
