//! This crate exposes a distributed, broadcast-based fitness evaluation which can be plugged into
//! an evolutionary or genetic programming engine as its cost function.
//!
//! A candidate is broadcast once to every partition of a cached observation set, each partition
//! scores its observations locally and partial scores are reduced into a single cost.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod data;
pub mod evaluation;
pub mod prelude;
pub mod runtime;
pub mod training;
pub mod utils;
