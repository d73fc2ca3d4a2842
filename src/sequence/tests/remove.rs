use crate::sequence::prelude::*;

#[test]
fn remove_at_single() -> anyhow::Result<()> {
    let mut sequence = Sequence::from_values([10, 20, 30, 40]);
    sequence.remove_at(&[1])?;

    assert_eq!(sequence.snapshot(), vec![10, 30, 40]);
    assert_eq!(sequence.length(), 3);

    Ok(())
}

#[test]
fn remove_at_unsorted_indices() -> anyhow::Result<()> {
    let mut sequence = Sequence::from_values(["a", "b", "c", "d"]);

    // order of the indices must not matter
    sequence.remove_at(&[3, 0])?;
    assert_eq!(sequence.snapshot(), vec!["b", "c"]);

    Ok(())
}

#[test]
fn remove_at_duplicate_indices() -> anyhow::Result<()> {
    let mut sequence = Sequence::from_values(["a", "b", "c", "d"]);

    // each duplicate removes one logical slot
    sequence.remove_at(&[1, 1])?;
    assert_eq!(sequence.length(), 2);
    assert_eq!(sequence.snapshot(), vec!["a", "c"]);

    Ok(())
}

#[test]
fn remove_at_out_of_bounds_is_atomic() {
    let mut sequence = Sequence::from_values([1, 2, 3]);

    for indices in [&[3][..], &[0, 99][..], &[usize::MAX][..], &[2, 1, 3][..]] {
        let result = sequence.remove_at(indices);
        assert!(result.is_err(), "Out-of-bounds removal must error!");
        assert_eq!(
            sequence.snapshot(),
            vec![1, 2, 3],
            "Failed removal must not mutate!"
        );
    }
}

#[test]
fn remove_values() {
    let mut sequence = Sequence::from_values(["one", "two", "three"]);

    let removed = sequence.remove(&["one"]);
    assert_eq!(removed, 1);
    assert_eq!(sequence.snapshot(), vec!["two", "three"]);

    let removed = sequence.remove(&["absent"]);
    assert_eq!(removed, 0);
    assert_eq!(sequence.snapshot(), vec!["two", "three"]);
}

#[test]
fn remove_values_batch_semantics() {
    // a value repeated in the input claims successive occurrences
    let mut sequence = Sequence::from_values(["x", "y", "x"]);
    let removed = sequence.remove(&["x", "x"]);
    assert_eq!(removed, 2);
    assert_eq!(sequence.snapshot(), vec!["y"]);

    // only one occurrence exists, so only one removal is recorded
    let mut sequence = Sequence::from_values(["x", "y"]);
    let removed = sequence.remove(&["x", "x"]);
    assert_eq!(removed, 1);
    assert_eq!(sequence.snapshot(), vec!["y"]);
}

#[test]
fn remove_all_by_predicate() {
    let mut sequence = Sequence::from_values(0..10);
    let removed = sequence.remove_all(|value| value % 2 == 0);

    assert_eq!(removed, 5);
    assert_eq!(sequence.snapshot(), vec![1, 3, 5, 7, 9]);
}

#[test]
fn pop_reads_and_removes_the_last() {
    let mut sequence = Sequence::from_values([1, 2, 3]);

    assert_eq!(sequence.pop(), Some(3));
    assert_eq!(sequence.pop(), Some(2));
    assert_eq!(sequence.pop(), Some(1));
    assert_eq!(sequence.pop(), None);
    assert!(sequence.is_empty());
}

#[test]
fn shift_reads_and_removes_the_first() {
    let mut sequence = Sequence::from_values([1, 2, 3]);

    assert_eq!(sequence.shift(), Some(1));
    assert_eq!(sequence.snapshot(), vec![2, 3]);
    assert_eq!(sequence.shift(), Some(2));
    assert_eq!(sequence.shift(), Some(3));
    assert_eq!(sequence.shift(), None);
}

#[test]
fn peek_does_not_remove() {
    let mut sequence = Sequence::from_values([1, 2]);
    assert_eq!(sequence.peek(), Some(&2));
    assert_eq!(sequence.length(), 2);

    sequence.clear();
    assert_eq!(sequence.peek(), None);
}
