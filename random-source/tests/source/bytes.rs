use random_source::testing::{CountingSource, SequenceSource};
use random_source::{RandomError, RandomSource};

fn ascending() -> CountingSource<SequenceSource> {
    let words: Vec<u32> = (0u8..16)
        .map(|i| {
            let base = 4 * i;
            u32::from_le_bytes([base, base + 1, base + 2, base + 3])
        })
        .collect();
    CountingSource::new(SequenceSource::new(words).expect("non-empty sequence"))
}

#[test]
fn test_draw_count_per_length() {
    for len in 0..=33usize {
        let mut source = ascending();
        let mut buf = vec![0u8; len];
        source.fill_bytes(&mut buf);

        let expected = len.div_ceil(4) as u64;
        assert_eq!(source.draws(), expected, "length {}", len);
    }
}

#[test]
fn test_bytes_follow_draw_order() {
    for len in 0..=33usize {
        let mut source = ascending();
        let mut buf = vec![0xFFu8; len];
        source.fill_bytes(&mut buf);

        let expected: Vec<u8> = (0..len as u8).collect();
        assert_eq!(buf, expected, "length {}", len);
    }
}

#[test]
fn test_absent_buffer_consumes_nothing() {
    let mut source = ascending();
    let result = source.next_bytes(None);

    assert_eq!(
        result,
        Err(RandomError::InvalidArgument {
            name: "buffer",
            reason: "buffer is absent",
        })
    );
    assert_eq!(source.draws(), 0);
    assert_eq!(source.inner().position(), 0);
}

#[test]
fn test_empty_buffer_is_noop() {
    let mut source = ascending();
    let mut buf: [u8; 0] = [];
    source
        .next_bytes(Some(&mut buf))
        .expect("empty buffer is valid");
    assert_eq!(source.draws(), 0);
}

#[test]
fn test_partial_fill_leaves_position_after_tail() {
    let mut source = ascending();
    let mut buf = [0u8; 6];
    source.fill_bytes(&mut buf);
    assert_eq!(buf, [0, 1, 2, 3, 4, 5]);

    // Bytes 6 and 7 of the second draw are discarded.
    let mut next = [0u8; 4];
    source.fill_bytes(&mut next);
    assert_eq!(next, [8, 9, 10, 11]);
}
