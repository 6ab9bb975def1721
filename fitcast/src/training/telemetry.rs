//! A module which provides the logic to collect metrics about training progress and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/training/telemetry_test.rs"]
mod telemetry_test;

use super::EvolutionEngine;
use crate::data::DatasetHandle;
use crate::utils::{Float, InfoLogger, Timer};
use serde::Serialize;
use std::time::Duration;

/// A progress report of one generation. It is purely observational.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Generation index.
    pub generation: usize,
    /// Population size.
    pub population_size: usize,
    /// Seconds elapsed since training started.
    pub elapsed_secs: u64,
    /// The best cost found so far.
    pub global_best_cost: Option<Float>,
    /// The best cost within the generation.
    pub current_cost: Option<Float>,
}

impl GenerationReport {
    /// Creates a fresh report from engine state.
    pub fn new<E: EvolutionEngine>(engine: &E, elapsed_secs: u64) -> Self {
        Self {
            generation: engine.generation(),
            population_size: engine.population_size(),
            elapsed_secs,
            global_best_cost: engine.global_best().map(|(_, cost)| cost),
            current_cost: engine.current_cost(),
        }
    }
}

/// Encapsulates measurements regarding a training run.
pub struct TelemetryMetrics {
    /// Training duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Per generation reports.
    pub evolution: Vec<GenerationReport>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often generation is logged, zero disables generation logging.
        display_every: usize,
    },
    /// Only metrics collection.
    OnlyMetrics,
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often generation is logged, zero disables generation logging.
        display_every: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            metrics: TelemetryMetrics { duration: 0, generations: 0, evolution: vec![] },
            time: Timer::start(),
            mode,
        }
    }

    /// Reports cached dataset.
    pub fn on_dataset(&self, dataset: &DatasetHandle) {
        self.log(
            format!(
                "[{}s] dataset is cached: {} observations in {} partitions, inputs: {}, outputs: {}",
                self.time.elapsed_secs(),
                dataset.size(),
                dataset.partition_count(),
                dataset.input_count(),
                dataset.output_count()
            )
            .as_str(),
        );
    }

    /// Reports initial population.
    pub fn on_initial(&self, population_size: usize, duration: Duration) {
        self.log(
            format!(
                "[{}s] created initial population of {} in {}ms",
                self.time.elapsed_secs(),
                population_size,
                duration.as_millis()
            )
            .as_str(),
        );
    }

    /// Reports generation statistics.
    pub fn on_generation(&mut self, report: GenerationReport) {
        self.metrics.generations = report.generation;

        let display_every = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { display_every, .. } | TelemetryMode::All { display_every, .. } => {
                *display_every
            }
            TelemetryMode::OnlyMetrics => 0,
        };

        if display_every > 0 && report.generation % display_every == 0 {
            self.log(
                format!(
                    "generation: {} (population: {}), elapsed: {} seconds",
                    report.generation, report.population_size, report.elapsed_secs
                )
                .as_str(),
            );
            self.log(
                format!(
                    "\tglobal cost: {}, current cost: {}",
                    format_cost(report.global_best_cost),
                    format_cost(report.current_cost)
                )
                .as_str(),
            );
        }

        if matches!(self.mode, TelemetryMode::OnlyMetrics | TelemetryMode::All { .. }) {
            self.metrics.evolution.push(report);
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, generations: usize, best_cost: Float) {
        let elapsed = self.time.elapsed_secs() as usize;

        self.metrics.generations = generations;
        self.metrics.duration = elapsed;

        self.log(format!("[{elapsed}s] total generations: {generations}, best cost: {best_cost:.6}").as_str());
    }

    /// Returns elapsed seconds since telemetry was created.
    pub fn elapsed_secs(&self) -> u64 {
        self.time.elapsed_secs()
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}

fn format_cost(cost: Option<Float>) -> String {
    cost.map(|cost| format!("{cost:.6}")).unwrap_or_else(|| "n/a".to_string())
}
