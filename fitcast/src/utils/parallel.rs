#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

pub use self::actual::ThreadPool;
pub use self::actual::map_reduce;
pub use self::actual::parallel_collect;
pub use self::actual::tree_reduce;

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
/// Specifies a minimum amount of items when halves of tree reduction are processed in parallel.
const PARALLEL_REDUCE_THRESHOLD: usize = 1 << 12;

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    extern crate rayon;
    use self::rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
    use super::PARALLEL_REDUCE_THRESHOLD;
    use crate::utils::GenericResult;
    use rayon::prelude::*;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool {
        inner: RayonThreadPool,
    }

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(num_threads: usize) -> GenericResult<Self> {
            let inner = ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|err| format!("cannot build a thread pool: {err}"))?;

            Ok(Self { inner })
        }

        /// Executes given operation on thread pool.
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            self.inner.install(op)
        }

        /// Returns amount of threads in the pool.
        pub fn threads(&self) -> usize {
            self.inner.current_num_threads()
        }
    }

    /// Maps collection and collects results into vector in parallel.
    pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        source.par_iter().map(map_op).collect()
    }

    /// Performs map reduce operations in parallel.
    pub fn map_reduce<'a, T, S, FM, FR, FD, R>(source: &'a S, map_op: FM, default_op: FD, reduce_op: FR) -> R
    where
        T: Send + Sync,
        S: IntoParallelRefIterator<'a, Item = T> + ?Sized,
        FM: Fn(T) -> R + Sync + Send,
        FR: Fn(R, R) -> R + Sync + Send,
        FD: Fn() -> R + Sync + Send,
        R: Send,
    {
        source.par_iter().map(map_op).reduce(default_op, reduce_op)
    }

    /// Reduces items using pairwise tree which shape depends only on amount of items, so
    /// the result is the same regardless of how work is scheduled. Returns None for empty input.
    pub fn tree_reduce<R, F>(items: Vec<R>, reduce_op: F) -> Option<R>
    where
        R: Send,
        F: Fn(R, R) -> R + Sync + Send,
    {
        let mut slots = items.into_iter().map(Some).collect::<Vec<_>>();

        reduce_slots(slots.as_mut_slice(), &reduce_op)
    }

    fn reduce_slots<R, F>(slots: &mut [Option<R>], reduce_op: &F) -> Option<R>
    where
        R: Send,
        F: Fn(R, R) -> R + Sync + Send,
    {
        match slots.len() {
            0 => None,
            1 => slots[0].take(),
            length => {
                let (left, right) = slots.split_at_mut(length / 2);
                let (left, right) = if length >= PARALLEL_REDUCE_THRESHOLD {
                    rayon::join(|| reduce_slots(left, reduce_op), || reduce_slots(right, reduce_op))
                } else {
                    (reduce_slots(left, reduce_op), reduce_slots(right, reduce_op))
                };

                match (left, right) {
                    (Some(left), Some(right)) => Some(reduce_op(left, right)),
                    (left, right) => left.or(right),
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    use crate::utils::GenericResult;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool;

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(_num_threads: usize) -> GenericResult<Self> {
            Ok(Self {})
        }

        /// Executes given operation on thread pool (dummy).
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            op()
        }

        /// Returns amount of threads in the pool.
        pub fn threads(&self) -> usize {
            1
        }
    }

    /// Map collections and collects results into vector synchronously.
    pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        source.iter().map(map_op).collect()
    }

    /// Performs map reduce operations synchronously.
    pub fn map_reduce<T, FM, FR, FD, R>(source: &[T], map_op: FM, default_op: FD, reduce_op: FR) -> R
    where
        T: Send + Sync,
        FM: Fn(&T) -> R + Sync + Send,
        FR: Fn(R, R) -> R + Sync + Send,
        FD: Fn() -> R + Sync + Send,
        R: Send,
    {
        source.iter().map(map_op).fold(default_op(), reduce_op)
    }

    /// Reduces items using pairwise tree synchronously. Returns None for empty input.
    pub fn tree_reduce<R, F>(items: Vec<R>, reduce_op: F) -> Option<R>
    where
        R: Send,
        F: Fn(R, R) -> R + Sync + Send,
    {
        let mut slots = items.into_iter().map(Some).collect::<Vec<_>>();

        reduce_slots(slots.as_mut_slice(), &reduce_op)
    }

    fn reduce_slots<R, F>(slots: &mut [Option<R>], reduce_op: &F) -> Option<R>
    where
        F: Fn(R, R) -> R,
    {
        match slots.len() {
            0 => None,
            1 => slots[0].take(),
            length => {
                let (left, right) = slots.split_at_mut(length / 2);

                match (reduce_slots(left, reduce_op), reduce_slots(right, reduce_op)) {
                    (Some(left), Some(right)) => Some(reduce_op(left, right)),
                    (left, right) => left.or(right),
                }
            }
        }
    }
}
