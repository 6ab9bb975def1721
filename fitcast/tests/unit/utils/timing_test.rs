use super::*;

#[test]
fn can_measure_duration_of_action() {
    let (result, duration) = Timer::measure_duration(|| {
        std::thread::sleep(Duration::from_millis(20));
        42
    });

    assert_eq!(result, 42);
    assert!(duration >= Duration::from_millis(20));
}

#[test]
fn can_report_monotonic_elapsed_time() {
    let timer = Timer::start();

    let first = timer.elapsed();
    std::thread::sleep(Duration::from_millis(5));
    let second = timer.elapsed();

    assert!(second >= first);
    assert!(second >= Duration::from_millis(5));
}
