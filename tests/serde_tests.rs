//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use gruppe::Permutation;

#[test]
fn permutation_roundtrip() {
    let p = Permutation::new(vec![1, 2, 0]).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[1,2,0]");
    let q: Permutation = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn identity_roundtrip() {
    let id = Permutation::identity(4);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "[0,1,2,3]");
    let back: Permutation = serde_json::from_str(&json).unwrap();
    assert_eq!(id, back);
}

#[test]
fn deserialization_revalidates_duplicates() {
    let result: Result<Permutation, _> = serde_json::from_str("[0,0,1]");
    assert!(result.is_err());
}

#[test]
fn deserialization_revalidates_range() {
    let result: Result<Permutation, _> = serde_json::from_str("[0,3,1]");
    assert!(result.is_err());
}

#[test]
fn empty_permutation_roundtrip() {
    let p = Permutation::identity(0);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let q: Permutation = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}
