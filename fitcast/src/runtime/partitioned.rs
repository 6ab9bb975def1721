#[cfg(test)]
#[path = "../../tests/unit/runtime/partitioned_test.rs"]
mod partitioned_test;

/// A partition index within a partitioned collection.
pub type PartitionId = usize;

/// A collection split into disjoint contiguous partitions. Partition count is fixed at creation.
#[derive(Debug)]
pub struct Partitioned<T> {
    partitions: Vec<Vec<T>>,
}

impl<T> Partitioned<T> {
    /// Splits items into `partition_count` contiguous partitions which sizes differ at most by one.
    /// The count is capped by the amount of items, so no partition is empty unless there are no
    /// items at all.
    pub fn new(items: Vec<T>, partition_count: usize) -> Self {
        let partition_count = partition_count.clamp(1, items.len().max(1));
        let base = items.len() / partition_count;
        let extra = items.len() % partition_count;

        let mut items = items.into_iter();
        let partitions = (0..partition_count)
            .map(|idx| {
                let size = if idx < extra { base + 1 } else { base };
                items.by_ref().take(size).collect::<Vec<_>>()
            })
            .collect();

        Self { partitions }
    }

    /// Returns an amount of partitions.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Returns partitions in their order.
    pub fn partitions(&self) -> &[Vec<T>] {
        self.partitions.as_slice()
    }

    /// Returns a total amount of items.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|partition| partition.len()).sum()
    }

    /// Returns true if there are no items in any partition.
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(|partition| partition.is_empty())
    }

    /// Returns the first item of the first non-empty partition.
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Iterates over all items in partition order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.partitions.iter().flat_map(|partition| partition.iter())
    }
}
