use crate::sequence::prelude::*;

#[test]
fn get() -> anyhow::Result<()> {
    let mut sequence = Sequence::<i32>::with_capacity(1);

    // empty sequence -> error
    assert!(sequence.get(0).is_err());

    sequence.add([42]);
    assert_eq!(*sequence.get(0)?, 42);

    Ok(())
}

#[test]
fn get_out_of_bounds() {
    let mut sequence = Sequence::<i32>::with_capacity(10);
    sequence.add([1, 2]);

    // the slot exists in the buffer but lies beyond the logical length
    assert!(sequence.length() < sequence.capacity());
    let result = sequence.get(sequence.length());
    assert_eq!(
        result,
        Err(SequenceError::IndexOutOfRange {
            index: 2,
            length: 2
        })
    );

    assert!(sequence.get(usize::MAX).is_err());
}

#[test]
fn get_every_valid_index() -> anyhow::Result<()> {
    let sequence = Sequence::from_values(0..100);
    for index in 0..sequence.length() {
        assert_eq!(*sequence.get(index)?, index as i32);
    }
    assert!(sequence.get(sequence.length()).is_err());
    Ok(())
}
