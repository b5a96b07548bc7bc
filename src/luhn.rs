//! Luhn algorithm implementation for card number checksums.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is the
//! universal prerequisite for a card number to be considered well formed,
//! regardless of network.
//!
//! # Performance
//!
//! Doubling goes through a lookup table, so the inner loop is a table read
//! and an add per digit.

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string against the Luhn checksum.
///
/// Every character must be an ASCII digit. Any other character (including
/// separators) makes the check fail rather than raising an error.
///
/// The empty string passes: the sum of zero terms is 0, which is congruent
/// to 0 modulo 10.
///
/// # Example
///
/// ```
/// use cc_schemes::luhn;
///
/// assert!(luhn::check("4539578763621486"));
/// assert!(!luhn::check("4539578763621487"));
/// assert!(!luhn::check("abcdefg"));
/// assert!(luhn::check(""));
/// ```
pub fn check(number: &str) -> bool {
    let mut sum: u32 = 0;
    let mut double = false;

    for b in number.bytes().rev() {
        if !b.is_ascii_digit() {
            return false;
        }
        let digit = b - b'0';
        sum += if double {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        double = !double;
    }

    sum % 10 == 0
}

/// Validates a sequence of digit values (0-9) using the Luhn algorithm.
///
/// Same rule as [`check`], for callers that already hold parsed digits.
/// An empty slice passes.
///
/// # Example
///
/// ```
/// use cc_schemes::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// The rightmost digit is position 0 and is not doubled; odd positions are.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes the digit that makes the
/// full number pass [`validate`].
///
/// # Example
///
/// ```
/// use cc_schemes::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one position left once the check digit is
    // appended, so the doubling parity flips.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

/// String form of [`generate_check_digit`].
///
/// Returns `None` if `partial` contains anything other than ASCII digits.
pub fn check_digit(partial: &str) -> Option<u8> {
    let digits = partial
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect::<Option<Vec<u8>>>()?;
    Some(generate_check_digit(&digits))
}
