//! Integration tests for the prefix module

use strkit::prefix::{common_prefix_len, starts_with, starts_with_bytes, strip_prefix};

// starts_with tests
#[test]
fn test_documented_examples() {
    assert!(starts_with("hello", "he"));
    assert!(!starts_with("hello", "lo"));
}

#[test]
fn test_full_string_is_own_prefix() {
    assert!(starts_with("hello", "hello"));
    assert!(starts_with("", ""));
}

#[test]
fn test_empty_test_matches_everything() {
    assert!(starts_with("hello", ""));
    assert!(starts_with("", ""));
    assert!(starts_with("日本語", ""));
}

#[test]
fn test_test_longer_than_s_is_false() {
    assert!(!starts_with("he", "hello"));
    assert!(!starts_with("", "x"));
    assert!(!starts_with("hell", "hello"));
}

#[test]
fn test_mismatch_in_middle() {
    assert!(!starts_with("hello", "ha"));
    assert!(!starts_with("hello", "hel!"));
}

#[test]
fn test_unicode_prefixes() {
    assert!(starts_with("日本語", "日本"));
    assert!(!starts_with("日本語", "本"));
}

#[test]
fn test_byte_slices_with_embedded_nul() {
    assert!(starts_with_bytes(b"a\x00b", b"a\x00"));
    assert!(!starts_with_bytes(b"a\x00b", b"a\x01"));
}

// strip_prefix tests
#[test]
fn test_strip_matching_prefix() {
    assert_eq!(strip_prefix("hello", "he"), Some("llo"));
    assert_eq!(strip_prefix("hello", "hello"), Some(""));
    assert_eq!(strip_prefix("hello", ""), Some("hello"));
}

#[test]
fn test_strip_non_matching_prefix() {
    assert_eq!(strip_prefix("hello", "lo"), None);
    assert_eq!(strip_prefix("he", "hello"), None);
}

#[test]
fn test_strip_agrees_with_starts_with() {
    let cases = [("src/lib.rs", "src/"), ("src/lib.rs", "tests/"), ("", ""), ("a", "ab")];
    for (s, prefix) in cases {
        assert_eq!(strip_prefix(s, prefix).is_some(), starts_with(s, prefix));
    }
}

// common_prefix_len tests
#[test]
fn test_common_prefix_basic() {
    assert_eq!(common_prefix_len("interstellar", "interstate"), 7);
    assert_eq!(common_prefix_len("same", "same"), 4);
    assert_eq!(common_prefix_len("a", "b"), 0);
}

#[test]
fn test_common_prefix_is_bounded() {
    assert_eq!(common_prefix_len("abc", "abcdef"), 3);
    assert_eq!(common_prefix_len("", "abc"), 0);
}

#[test]
fn test_common_prefix_splits_both_inputs() {
    let (a, b) = ("héllo", "héllp");
    let len = common_prefix_len(a, b);
    assert_eq!(&a[..len], &b[..len]);
}
