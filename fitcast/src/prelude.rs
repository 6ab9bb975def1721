//! This module reimports a common used types.

pub use crate::data::DatasetHandle;
pub use crate::data::Observation;
pub use crate::data::ObservationSlot;

pub use crate::evaluation::CandidateCost;
pub use crate::evaluation::CandidatePreprocessing;
pub use crate::evaluation::DistributedCostEvaluator;
pub use crate::evaluation::EffectivePreprocessing;
pub use crate::evaluation::IdentityPreprocessing;
pub use crate::evaluation::IntronMask;
pub use crate::evaluation::ReductionMode;
pub use crate::evaluation::ScoringFn;
pub use crate::evaluation::StructuralIntrons;
pub use crate::evaluation::create_scoring_fn;

pub use crate::runtime::Broadcast;
pub use crate::runtime::Cluster;
pub use crate::runtime::LocalCluster;
pub use crate::runtime::Partitioned;

pub use crate::training::EvolutionEngine;
pub use crate::training::GenerationReport;
pub use crate::training::TelemetryMode;
pub use crate::training::TrainingConfig;
pub use crate::training::TrainingConfigBuilder;
pub use crate::training::TrainingDriver;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::EvaluationError;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::Timer;
