//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use fpoly::{poly, Poly};

#[test]
fn poly_roundtrip() {
    // 3 + 2x + x^2
    let p = poly![3, 2, 1];
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[3.0,2.0,1.0]");
    let q: Poly = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_serializes_constant_term() {
    let json = serde_json::to_string(&Poly::default()).unwrap();
    assert_eq!(json, "[0.0]");
}

#[test]
fn deserialize_normalizes() {
    let p: Poly = serde_json::from_str("[1.5, 0, 0]").unwrap();
    assert_eq!(p.coefficients(), &[1.5]);

    let z: Poly = serde_json::from_str("[]").unwrap();
    assert!(z.is_zero());
}

#[test]
fn deserialize_rejects_non_array() {
    let result: Result<Poly, _> = serde_json::from_str("{\"coeffs\": [1]}");
    assert!(result.is_err());
}
