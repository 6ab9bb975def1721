//! The data module contains observation records and a partitioned, cached dataset built from them.

#[cfg(test)]
#[path = "../../tests/unit/data/observation_test.rs"]
mod observation_test;

use crate::utils::{Float, Random};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

mod dataset;
pub use self::dataset::*;

/// An immutable record which holds a fixed-size input vector and a fixed-size target output vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    inputs: Vec<Float>,
    outputs: Vec<Float>,
}

impl Observation {
    /// Creates a new instance of `Observation`.
    pub fn new(inputs: Vec<Float>, outputs: Vec<Float>) -> Self {
        Self { inputs, outputs }
    }

    /// Returns input value at given index.
    pub fn input(&self, index: usize) -> Float {
        self.inputs[index]
    }

    /// Returns target output value at given index.
    pub fn output(&self, index: usize) -> Float {
        self.outputs[index]
    }

    /// Returns all inputs.
    pub fn inputs(&self) -> &[Float] {
        self.inputs.as_slice()
    }

    /// Returns all target outputs.
    pub fn outputs(&self) -> &[Float] {
        self.outputs.as_slice()
    }

    /// Returns input arity.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Returns output arity.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Runs the action with a slot which has a fresh, zeroed predicted output buffer.
    /// The buffer lives only for the duration of the action.
    pub fn with_slot<R>(&self, action: impl FnOnce(&mut ObservationSlot<'_>) -> R) -> R {
        let mut predicted = vec![0.; self.output_count()];
        let mut slot = ObservationSlot { observation: self, predicted: predicted.as_mut_slice() };

        action(&mut slot)
    }
}

/// A view on observation which adds a writable predicted output slot.
///
/// Predicted outputs are private to one scoring call: concurrent evaluations never see
/// each other's predictions.
pub struct ObservationSlot<'a> {
    observation: &'a Observation,
    predicted: &'a mut [Float],
}

impl<'a> ObservationSlot<'a> {
    /// Returns underlying observation.
    pub fn observation(&self) -> &'a Observation {
        self.observation
    }

    /// Returns input value at given index.
    pub fn input(&self, index: usize) -> Float {
        self.observation.input(index)
    }

    /// Returns target output value at given index.
    pub fn output(&self, index: usize) -> Float {
        self.observation.output(index)
    }

    /// Returns predicted output value at given index.
    pub fn predicted_output(&self, index: usize) -> Float {
        self.predicted[index]
    }

    /// Sets predicted output value at given index.
    pub fn set_predicted_output(&mut self, index: usize, value: Float) {
        self.predicted[index] = value;
    }

    /// Returns all predicted outputs.
    pub fn predicted_outputs(&self) -> &[Float] {
        self.predicted
    }
}

/// Shuffles items and splits them into two parts: the first one has `ratio` share of items.
pub fn split_observations<T>(
    mut items: Vec<T>,
    ratio: Float,
    random: &(dyn Random + Send + Sync),
) -> (Vec<T>, Vec<T>) {
    items.shuffle(&mut random.get_rng());

    let split_at = ((items.len() as Float) * ratio.clamp(0., 1.)).round() as usize;
    let rest = items.split_off(split_at.min(items.len()));

    (items, rest)
}
