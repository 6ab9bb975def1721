#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use std::time::Duration;

/// Measures wall clock time of a training run. `Instant` is not available on wasm32, so the
/// clock source is chosen per target.
#[derive(Clone)]
pub struct Timer {
    started: clock::Moment,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { started: clock::now() }
    }

    /// Returns time passed since the timer was started.
    pub fn elapsed(&self) -> Duration {
        clock::since(&self.started)
    }

    /// Returns whole seconds passed since the timer was started.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Runs the action and returns its result together with the time it took.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Self::start();
        let result = action();

        (result, timer.elapsed())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod clock {
    use std::time::{Duration, Instant};

    pub type Moment = Instant;

    pub fn now() -> Moment {
        Instant::now()
    }

    pub fn since(moment: &Moment) -> Duration {
        moment.elapsed()
    }
}

#[cfg(target_arch = "wasm32")]
mod clock {
    use crate::utils::Float;
    use std::time::Duration;

    /// Milliseconds since unix epoch.
    pub type Moment = Float;

    pub fn now() -> Moment {
        js_sys::Date::now()
    }

    pub fn since(moment: &Moment) -> Duration {
        Duration::from_secs_f64(((now() - moment) / 1000.).max(0.))
    }
}
