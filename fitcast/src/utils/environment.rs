use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences evaluation behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An amount of worker threads used by a local cluster. None means amount of CPUs.
    pub threads: Option<usize>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, threads: Option<usize>, logger: InfoLogger) -> Self {
        Self { random, threads, logger }
    }

    /// Creates an instance of `Environment` with silent logger.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_: &str| {}), ..Self::default() }
    }

    /// Returns an amount of worker threads to be used.
    pub fn get_threads(&self) -> usize {
        self.threads.unwrap_or_else(get_cpus).max(1)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg: &str| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
