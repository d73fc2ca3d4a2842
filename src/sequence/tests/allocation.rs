use crate::sequence::prelude::*;

#[test]
fn allocation() {
    let sequence = Sequence::<i32>::new();
    assert_eq!(sequence.length(), 0);
    assert_eq!(sequence.capacity(), 16);

    let sequence = Sequence::<i32>::with_capacity(3);
    assert_eq!(sequence.length(), 0);
    assert_eq!(sequence.capacity(), 3);

    let sequence = Sequence::<i32>::with_capacity(0);
    assert_eq!(sequence.length(), 0);
    assert_eq!(sequence.capacity(), 0);

    let sequence = Sequence::<i32>::default();
    assert_eq!(sequence.length(), 0);
    assert_eq!(sequence.capacity(), 16);
}

#[test]
fn from_values_has_no_slack() {
    let sequence = Sequence::from_values(["one", "two", "three"]);
    assert_eq!(sequence.length(), 3);
    assert_eq!(sequence.capacity(), 3);
    assert_eq!(sequence.snapshot(), vec!["one", "two", "three"]);
}

#[test]
fn from_values_round_trips() -> anyhow::Result<()> {
    let source = vec![1, 2, 3, 4, 5];
    let sequence = Sequence::from_values(source.clone());

    assert_eq!(sequence.length(), source.len());
    assert_eq!(sequence.snapshot(), source);
    for (index, expected) in source.iter().enumerate() {
        assert_eq!(sequence.get(index)?, expected);
    }

    Ok(())
}

#[test]
fn collect_from_iterator() {
    let sequence: Sequence<i32> = (0..10).filter(|value| value % 2 == 0).collect();
    assert_eq!(sequence.snapshot(), vec![0, 2, 4, 6, 8]);
    assert_eq!(sequence.capacity(), sequence.length());
}

#[test]
fn clone_is_a_deep_copy() -> anyhow::Result<()> {
    let mut original = Sequence::<i32>::new();
    original.add([1, 2, 3]);

    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), copy.length(), "A copy carries no slack!");

    // Independent backing storage: mutating the copy leaves the
    // original untouched.
    copy.set(0, 99)?;
    assert_eq!(*original.get(0)?, 1);
    assert_ne!(copy, original);

    Ok(())
}

#[test]
fn clear_resets_to_minimal_capacity() {
    let mut sequence = Sequence::from_values([1, 2, 3, 4, 5]);
    sequence.clear();

    assert_eq!(sequence.length(), 0);
    assert_eq!(sequence.capacity(), 1);
    assert!(sequence.is_empty());
    assert!(sequence.get(0).is_err(), "Cleared sequences hold nothing!");
}
