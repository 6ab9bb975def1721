use super::*;
use crate::helpers::data::*;
use std::sync::{Arc, Mutex};

fn create_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

fn create_report(generation: usize) -> GenerationReport {
    GenerationReport {
        generation,
        population_size: 10,
        elapsed_secs: 0,
        global_best_cost: Some(1. / generation as Float),
        current_cost: None,
    }
}

#[test]
fn can_log_generation_every_display_interval() {
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, display_every: 2 });

    (1..=5).for_each(|generation| telemetry.on_generation(create_report(generation)));

    let messages = messages.lock().unwrap();
    assert_eq!(
        *messages,
        vec![
            "generation: 2 (population: 10), elapsed: 0 seconds".to_string(),
            "\tglobal cost: 0.500000, current cost: n/a".to_string(),
            "generation: 4 (population: 10), elapsed: 0 seconds".to_string(),
            "\tglobal cost: 0.250000, current cost: n/a".to_string(),
        ]
    );
    drop(messages);
    assert!(telemetry.take_metrics().is_none());
}

#[test]
fn can_disable_generation_logging_with_zero_interval() {
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::All { logger, display_every: 0 });

    (1..=3).for_each(|generation| telemetry.on_generation(create_report(generation)));
    telemetry.on_result(3, 0.5);

    let messages = messages.lock().unwrap().clone();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].ends_with("total generations: 3, best cost: 0.500000"));

    let metrics = telemetry.take_metrics().unwrap();
    assert_eq!(metrics.generations, 3);
    assert_eq!(metrics.evolution.len(), 3);
}

#[test]
fn can_collect_metrics_without_logging() {
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics);

    telemetry.on_generation(create_report(1));
    telemetry.on_generation(create_report(2));
    telemetry.on_result(2, 0.5);

    let metrics = telemetry.take_metrics().unwrap();
    assert_eq!(metrics.generations, 2);
    assert_eq!(metrics.evolution, vec![create_report(1), create_report(2)]);
}

#[test]
fn can_skip_everything_with_none_mode() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_generation(create_report(1));
    telemetry.log("ignored");

    assert!(telemetry.take_metrics().is_none());
}

#[test]
fn can_log_dataset_and_initial_population() {
    let (logger, messages) = create_logger();
    let cluster = create_test_cluster();
    let dataset = create_test_dataset(cluster.as_ref(), create_valued_observations(&[1., 2., 3.]), Some(2));
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, display_every: 1 });

    telemetry.on_dataset(&dataset);
    telemetry.on_initial(8, Duration::from_millis(15));

    let messages = messages.lock().unwrap().clone();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].ends_with("dataset is cached: 3 observations in 2 partitions, inputs: 1, outputs: 1"));
    assert!(messages[1].ends_with("created initial population of 8 in 15ms"));
}

#[test]
fn can_serialize_generation_report() {
    let report = GenerationReport {
        generation: 3,
        population_size: 4,
        elapsed_secs: 1,
        global_best_cost: Some(0.5),
        current_cost: Some(0.75),
    };

    let json = serde_json::to_string(&report).unwrap();

    assert_eq!(
        json,
        r#"{"generation":3,"populationSize":4,"elapsedSecs":1,"globalBestCost":0.5,"currentCost":0.75}"#
    );
}
