//! Training configuration.

#[cfg(test)]
#[path = "../../tests/unit/training/config_test.rs"]
mod config_test;

use super::TelemetryMode;
use crate::evaluation::ReductionMode;
use crate::runtime::LocalCluster;
use crate::utils::{Environment, EvaluationError, EvaluationResult, InfoLogger};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A training run configuration. It replaces any mutable engine wide state: everything the
/// driver needs is passed explicitly.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingConfig {
    /// An amount of dataset partitions. Default is cluster's default parallelism.
    pub partition_count: Option<usize>,
    /// Specifies how per-observation scores are combined. Default is mean.
    #[serde(default)]
    pub reduction: ReductionMode,
    /// An amount of worker threads for a local cluster. Default is amount of CPUs.
    pub threads: Option<usize>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging of training progress.
    pub logging: Option<LoggingConfig>,
    /// Specifies metrics collection.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging.
    pub enabled: bool,
    /// Specifies how often generation progress is logged. Default is every generation.
    pub display_every: Option<usize>,
}

/// A metrics collection configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Enables collection of per generation reports.
    pub enabled: bool,
}

impl TrainingConfig {
    /// Checks that configuration values are valid.
    pub fn validate(&self) -> EvaluationResult<()> {
        if self.partition_count == Some(0) {
            return Err(EvaluationError::configuration("partition count must be positive"));
        }

        if self.threads == Some(0) {
            return Err(EvaluationError::configuration("amount of threads must be positive"));
        }

        Ok(())
    }

    /// Creates a telemetry mode using given logger.
    pub fn telemetry_mode(&self, logger: InfoLogger) -> TelemetryMode {
        let telemetry = self.telemetry.as_ref();
        let logging = telemetry.and_then(|telemetry| telemetry.logging.as_ref()).filter(|logging| logging.enabled);
        let metrics = telemetry.and_then(|telemetry| telemetry.metrics.as_ref()).is_some_and(|metrics| metrics.enabled);

        match (logging, metrics) {
            (None, false) => TelemetryMode::None,
            (None, true) => TelemetryMode::OnlyMetrics,
            (Some(logging), false) => {
                TelemetryMode::OnlyLogging { logger, display_every: logging.display_every.unwrap_or(1) }
            }
            (Some(logging), true) => TelemetryMode::All { logger, display_every: logging.display_every.unwrap_or(1) },
        }
    }
}

/// Provides configurable way to build training configuration using fluent interface style.
#[derive(Default)]
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl TrainingConfigBuilder {
    /// Sets an amount of dataset partitions. Default is cluster's default parallelism.
    pub fn with_partition_count(mut self, partition_count: Option<usize>) -> Self {
        self.config.partition_count = partition_count;
        self
    }

    /// Sets reduction mode. Default is mean.
    pub fn with_reduction(mut self, reduction: ReductionMode) -> Self {
        self.config.reduction = reduction;
        self
    }

    /// Sets an amount of worker threads. Default is amount of CPUs.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Enables progress logging every `display_every` generations. Zero disables generation logs,
    /// but keeps the rest of logging.
    pub fn with_display_every(mut self, display_every: usize) -> Self {
        let telemetry = self.config.telemetry.get_or_insert_with(TelemetryConfig::default);
        telemetry.logging = Some(LoggingConfig { enabled: true, display_every: Some(display_every) });
        self
    }

    /// Enables or disables collection of per generation reports.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        let telemetry = self.config.telemetry.get_or_insert_with(TelemetryConfig::default);
        telemetry.metrics = Some(MetricsConfig { enabled });
        self
    }

    /// Builds and validates the training config.
    pub fn build(self) -> EvaluationResult<TrainingConfig> {
        self.config.validate()?;

        Ok(self.config)
    }
}

/// Reads and validates training config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> EvaluationResult<TrainingConfig> {
    let config: TrainingConfig = serde_json::from_reader(reader)
        .map_err(|err| EvaluationError::configuration(format!("cannot deserialize config: '{err}'")))?;

    config.validate()?;

    Ok(config)
}

/// Creates a local cluster which uses amount of threads from the config or, if it is not
/// specified there, from the environment.
pub fn create_local_cluster(config: &TrainingConfig, environment: &Environment) -> EvaluationResult<LocalCluster> {
    let threads = config.threads.unwrap_or_else(|| environment.get_threads());

    LocalCluster::with_threads(threads).map_err(EvaluationError::Runtime)
}
