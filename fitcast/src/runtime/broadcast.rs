#[cfg(test)]
#[path = "../../tests/unit/runtime/broadcast_test.rs"]
mod broadcast_test;

use crate::utils::{EvaluationError, EvaluationResult};
use rustc_hash::FxHashMap;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// An unique id of broadcast value.
pub type BroadcastId = usize;

type Payload = Arc<dyn Any + Send + Sync>;

/// Keeps broadcast values readable by all partitions of a local cluster.
///
/// Values are kept as they are, without any codec, so every partition reads exactly the value
/// which was broadcast.
#[derive(Default)]
pub struct BroadcastRegistry {
    payloads: RwLock<FxHashMap<BroadcastId, Payload>>,
    next_id: AtomicUsize,
    released: AtomicUsize,
}

impl BroadcastRegistry {
    /// Stores payload and returns its id.
    pub(crate) fn publish(&self, payload: Payload) -> BroadcastId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.payloads.write().unwrap_or_else(|poisoned| poisoned.into_inner()).insert(id, payload);

        id
    }

    /// Returns payload if it is not released yet.
    pub(crate) fn fetch(&self, id: BroadcastId) -> Option<Payload> {
        self.payloads.read().unwrap_or_else(|poisoned| poisoned.into_inner()).get(&id).cloned()
    }

    /// Removes payload. Returns false if it was already released.
    fn release(&self, id: BroadcastId) -> bool {
        let removed = self.payloads.write().unwrap_or_else(|poisoned| poisoned.into_inner()).remove(&id).is_some();

        if removed {
            self.released.fetch_add(1, Ordering::Relaxed);
        }

        removed
    }

    /// Returns an amount of broadcasts which are not released yet.
    pub fn live_count(&self) -> usize {
        self.payloads.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    /// Returns a total amount of broadcasts ever created.
    pub fn created_count(&self) -> usize {
        self.next_id.load(Ordering::Relaxed)
    }

    /// Returns a total amount of released broadcasts.
    pub fn released_count(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }
}

/// A write-once, cluster-wide readable reference to exactly one value.
///
/// The value is released exactly once: either by `destroy` or, on any other path out of the
/// owning scope including unwinding, by `Drop`. The handle must not outlive the evaluation which
/// created it.
pub struct Broadcast<T> {
    id: BroadcastId,
    registry: Arc<BroadcastRegistry>,
    is_released: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Broadcast<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Publishes a copy of the value in the registry.
    pub fn new(value: &T, registry: Arc<BroadcastRegistry>) -> Self {
        let id = registry.publish(Arc::new(value.clone()));

        Self { id, registry, is_released: false, _marker: PhantomData }
    }

    /// Reads a shared, read only broadcast value.
    pub fn value(&self) -> EvaluationResult<Arc<T>> {
        let payload = self
            .registry
            .fetch(self.id)
            .ok_or_else(|| EvaluationError::runtime(format!("broadcast {} is already released", self.id)))?;

        payload
            .downcast::<T>()
            .map_err(|_| EvaluationError::runtime(format!("broadcast {} holds a value of unexpected type", self.id)))
    }
}

impl<T> Broadcast<T> {
    /// Returns broadcast id.
    pub fn id(&self) -> BroadcastId {
        self.id
    }

    /// Releases the value in the registry.
    pub fn destroy(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.is_released {
            self.is_released = true;
            self.registry.release(self.id);
        }
    }
}

impl<T> Drop for Broadcast<T> {
    fn drop(&mut self) {
        self.release();
    }
}
