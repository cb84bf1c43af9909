//! Tests for the digest primitive

use crate::digest::{digest, DIGEST_LEN};

const EMPTY_SHA512: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";
const ABC_SHA512: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

#[test]
fn test_empty_input_matches_reference() {
    assert_eq!(digest(b"").to_hex(), EMPTY_SHA512);
}

#[test]
fn test_abc_matches_reference() {
    assert_eq!(digest(b"abc").to_hex(), ABC_SHA512);
}

#[test]
fn test_hex_is_128_lowercase_chars() {
    for input in [&b""[..], &b"a"[..], &b"hello world"[..], &[0xffu8; 1000][..]] {
        let hex = digest(input).to_hex();
        assert_eq!(hex.len(), DIGEST_LEN * 2);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_digest_is_deterministic() {
    let first = digest(b"test content");
    let second = digest(b"test content");
    assert_eq!(first, second);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_different_content_differs() {
    assert_ne!(digest(b"content A"), digest(b"content B"));
}

#[test]
fn test_display_matches_to_hex() {
    let value = digest(b"abc");
    assert_eq!(format!("{value}"), value.to_hex());
    assert!(format!("{value:?}").starts_with("DigestValue(ddaf35a1"));
}
