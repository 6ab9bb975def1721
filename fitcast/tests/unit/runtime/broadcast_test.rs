use super::*;
use crate::utils::{DefaultRandom, Float, Random};
use rand::RngCore;

fn create_registry() -> Arc<BroadcastRegistry> {
    Arc::new(BroadcastRegistry::default())
}

#[test]
fn can_read_broadcast_value() {
    let registry = create_registry();
    let value = vec![1., 2., 3.];

    let broadcast = Broadcast::new(&value, registry.clone());

    assert_eq!(*broadcast.value().unwrap(), value);
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn can_read_exact_bits_of_arbitrary_floats() {
    let mut rng = DefaultRandom::new_repeatable(7).get_rng();
    let value = (0..1000).map(|_| Float::from_bits(rng.next_u64())).collect::<Vec<_>>();

    let broadcast = Broadcast::new(&value, create_registry());
    let restored = broadcast.value().unwrap();

    assert_eq!(restored.len(), value.len());
    assert!(restored.iter().zip(value.iter()).all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn can_read_non_finite_floats() {
    let value = vec![Float::INFINITY, Float::NEG_INFINITY, Float::NAN, -0., Float::MIN_POSITIVE / 2.];

    let broadcast = Broadcast::new(&value, create_registry());
    let restored = broadcast.value().unwrap();

    assert_eq!(restored[0], Float::INFINITY);
    assert_eq!(restored[1], Float::NEG_INFINITY);
    assert!(restored[2].is_nan());
    assert!(restored.iter().zip(value.iter()).all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn can_release_on_destroy_exactly_once() {
    let registry = create_registry();

    let broadcast = Broadcast::new(&"program".to_string(), registry.clone());
    broadcast.destroy();

    assert_eq!(registry.live_count(), 0);
    assert_eq!(registry.created_count(), 1);
    assert_eq!(registry.released_count(), 1);
}

#[test]
fn can_release_on_drop() {
    let registry = create_registry();

    {
        let _broadcast = Broadcast::new(&42_usize, registry.clone());
        assert_eq!(registry.live_count(), 1);
    }

    assert_eq!(registry.live_count(), 0);
    assert_eq!(registry.released_count(), 1);
}

#[test]
fn can_assign_unique_ids() {
    let registry = create_registry();

    let first = Broadcast::new(&1_i32, registry.clone());
    let second = Broadcast::new(&2_i32, registry.clone());

    assert_ne!(first.id(), second.id());
    assert_eq!(*first.value().unwrap(), 1);
    assert_eq!(*second.value().unwrap(), 2);
}

#[test]
fn can_fail_reading_released_payload() {
    let registry = create_registry();
    let broadcast = Broadcast::new(&1_i32, registry.clone());
    let orphan: Broadcast<i32> =
        Broadcast { id: broadcast.id(), registry: registry.clone(), is_released: true, _marker: PhantomData };

    broadcast.destroy();

    assert!(matches!(orphan.value(), Err(EvaluationError::Runtime(_))));
    assert_eq!(registry.released_count(), 1);
}

#[test]
fn can_fail_reading_payload_of_another_type() {
    let registry = create_registry();
    let broadcast = Broadcast::new(&1_i32, registry.clone());
    let mistyped: Broadcast<String> =
        Broadcast { id: broadcast.id(), registry: registry.clone(), is_released: true, _marker: PhantomData };

    assert!(matches!(mistyped.value(), Err(EvaluationError::Runtime(_))));
    assert_eq!(*broadcast.value().unwrap(), 1);
}
