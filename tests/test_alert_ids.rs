// ABOUTME: Unit tests for identifier generation: uniqueness and identifier-safe shape

use std::collections::HashSet;

use alert_box::alerts::{AlertIdSource, RandomIdSource, SequentialIdSource};

#[test]
fn test_random_ids_are_pairwise_distinct() {
    let mut source = RandomIdSource;
    let ids: HashSet<String> = (0..1000).map(|_| source.next_id()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_random_ids_are_identifier_safe() {
    let mut source = RandomIdSource;
    for _ in 0..100 {
        let id = source.next_id();
        assert!(id.starts_with("alert-"), "unexpected prefix: {id}");
        let first = id.chars().next().unwrap();
        assert!(!first.is_ascii_digit());
        assert!(
            id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
            "unexpected character in: {id}"
        );
        // The random part is hyphen-delimited lowercase hex groups.
        let suffix = &id["alert-".len()..];
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
        assert!(!suffix.is_empty());
    }
}

#[test]
fn test_sequential_ids_are_distinct_and_deterministic() {
    let mut source = SequentialIdSource::new();
    assert_eq!(source.next_id(), "alert-00000000");
    assert_eq!(source.next_id(), "alert-00000001");

    let mut source = SequentialIdSource::new();
    let ids: HashSet<String> = (0..1000).map(|_| source.next_id()).collect();
    assert_eq!(ids.len(), 1000);
}
