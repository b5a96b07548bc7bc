//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_schemes::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    let number: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();

    // String and slice forms must agree
    assert_eq!(
        luhn::check(&number),
        luhn::validate(&digits),
        "check/validate mismatch"
    );

    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");
        assert_eq!(luhn::check_digit(&number), Some(check));

        // Adding check digit should make it valid
        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }

    // Raw bytes may hold anything; must not panic
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = luhn::check(s);
        let _ = luhn::check_digit(s);
    }
});
