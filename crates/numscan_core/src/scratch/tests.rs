use super::*;

#[test]
fn new_buffer_is_empty_and_inline() {
    let buf = ScratchBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(!buf.spilled());
}

#[test]
fn short_input_stays_inline() {
    let buf = ScratchBuffer::from_bytes(b"1_000_000");
    assert_eq!(buf.as_bytes(), b"1_000_000");
    assert!(!buf.spilled());
}

#[test]
fn long_input_spills_to_heap() {
    let long = vec![b'9'; INLINE_CAPACITY + 1];
    let buf = ScratchBuffer::from_bytes(&long);
    assert_eq!(buf.len(), INLINE_CAPACITY + 1);
    assert!(buf.spilled());
}

#[test]
fn reset_keeps_heap_allocation() {
    let long = vec![b'1'; INLINE_CAPACITY * 2];
    let mut buf = ScratchBuffer::from_bytes(&long);
    assert!(buf.spilled());
    buf.reset();
    assert!(buf.is_empty());
    assert!(buf.spilled(), "reset should not give the allocation back");
}

#[test]
fn load_replaces_contents() {
    let mut buf = ScratchBuffer::from_bytes(b"abc");
    buf.load(b"12");
    assert_eq!(buf.as_bytes(), b"12");
    buf.load(b"");
    assert!(buf.is_empty());
}

#[test]
fn remove_separators_truncates() {
    let mut buf = ScratchBuffer::from_bytes(b"1_000");
    assert!(buf.remove_separators(SeparatorMode::Decimal));
    assert_eq!(buf.as_bytes(), b"1000");
    assert!(!buf.remove_separators(SeparatorMode::Decimal));
    assert_eq!(buf.as_bytes(), b"1000");
}

#[test]
fn remove_separators_reports_nothing_removed() {
    let mut buf = ScratchBuffer::from_bytes(b"1__0");
    assert!(!buf.remove_separators(SeparatorMode::Decimal));
    assert_eq!(buf.as_bytes(), b"1__0");
}
