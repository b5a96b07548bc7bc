//! Fuzz target for card validation.
//!
//! Tests that validation never panics on arbitrary input and that a
//! checksum failure is always reported as such.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cc_schemes::{luhn, mask, Card, SchemeRegistry, ValidationError};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    number: &'a str,
    code: Option<u32>,
}

fuzz_target!(|input: Input<'_>| {
    let registry = SchemeRegistry::new();

    let mut card = Card::new(input.number);
    if let Some(code) = input.code {
        card = card.with_code(code);
    }

    let result = registry.validate(&card);
    assert_eq!(registry.is_valid(&card), result.is_ok());

    if !luhn::check(card.number()) {
        assert_eq!(result, Err(ValidationError::ChecksumInvalid));
    }

    // Masking handles any characters
    let _ = card.masked();
    let _ = mask::mask_last_four(input.number);
    let _ = registry.detect(input.number);
});
