use super::*;

parameterized_test! {can_split_items_into_partitions, (size, partition_count, expected), {
    let partitioned = Partitioned::new((0..size).collect::<Vec<_>>(), partition_count);

    let sizes = partitioned.partitions().iter().map(|partition| partition.len()).collect::<Vec<_>>();

    assert_eq!(sizes, expected);
    assert_eq!(partitioned.len(), size);
    assert_eq!(partitioned.partition_count(), expected.len());
}}

can_split_items_into_partitions! {
    case01_even: (6, 3, vec![2, 2, 2]),
    case02_uneven: (7, 3, vec![3, 2, 2]),
    case03_single: (5, 1, vec![5]),
    case04_more_partitions_than_items: (2, 4, vec![1, 1]),
    case05_zero_is_one: (3, 0, vec![3]),
    case06_empty: (0, 2, vec![0]),
    case07_max_partitions: (3, usize::MAX, vec![1, 1, 1]),
    case08_max_partitions_empty: (0, usize::MAX, vec![0]),
}

#[test]
fn can_keep_items_order_across_partitions() {
    let partitioned = Partitioned::new((0..10).collect::<Vec<_>>(), 4);

    assert_eq!(partitioned.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
}

#[test]
fn can_get_first_item_skipping_empty_partitions() {
    let partitioned = Partitioned { partitions: vec![vec![], vec![], vec![42, 1]] };

    assert_eq!(partitioned.first(), Some(&42));
    assert!(!partitioned.is_empty());
}

#[test]
fn can_detect_empty_collection() {
    let partitioned = Partitioned::new(Vec::<i32>::new(), 3);

    assert!(partitioned.is_empty());
    assert_eq!(partitioned.first(), None);
}
