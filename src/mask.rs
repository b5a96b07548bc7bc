//! PCI-DSS compliant masking for card numbers.
//!
//! PCI-DSS allows displaying:
//! - First 6 digits (BIN) and last 4 digits
//! - Only the last 4 digits (preferred for customer-facing display)
//!
//! Never display or log the full card number.

/// Number of leading characters that make up the BIN.
pub const BIN_LENGTH: usize = 6;

/// Number of trailing characters left visible.
pub const LAST_FOUR: usize = 4;

/// Returns the first [`BIN_LENGTH`] characters, or the whole input if shorter.
pub fn bin(number: &str) -> &str {
    match number.char_indices().nth(BIN_LENGTH) {
        Some((idx, _)) => &number[..idx],
        None => number,
    }
}

/// Returns the last [`LAST_FOUR`] characters, or the whole input if shorter.
pub fn last_four(number: &str) -> &str {
    let count = number.chars().count();
    if count <= LAST_FOUR {
        return number;
    }
    match number.char_indices().nth(count - LAST_FOUR) {
        Some((idx, _)) => &number[idx..],
        None => number,
    }
}

/// Masks everything except the last four characters.
///
/// Format: `************1111`
///
/// # Example
///
/// ```
/// use cc_schemes::mask::mask_last_four;
///
/// assert_eq!(mask_last_four("4111111111111111"), "************1111");
/// assert_eq!(mask_last_four("123"), "***");
/// ```
pub fn mask_last_four(number: &str) -> String {
    let count = number.chars().count();
    if count <= LAST_FOUR {
        return "*".repeat(count);
    }

    let mut result = "*".repeat(count - LAST_FOUR);
    result.push_str(last_four(number));
    result
}

/// Masks a card number showing the BIN (first 6) and last 4 characters.
///
/// Format: `411111******1111`
///
/// Numbers of ten characters or fewer would expose everything, so they fall
/// back to [`mask_last_four`].
///
/// # Example
///
/// ```
/// use cc_schemes::mask::mask_with_bin;
///
/// assert_eq!(mask_with_bin("4111111111111111"), "411111******1111");
/// assert_eq!(mask_with_bin("378282246310005"), "378282*****0005");
/// ```
pub fn mask_with_bin(number: &str) -> String {
    let count = number.chars().count();
    if count <= BIN_LENGTH + LAST_FOUR {
        return mask_last_four(number);
    }

    let mut result = String::with_capacity(count);
    result.push_str(bin(number));
    result.extend(std::iter::repeat('*').take(count - BIN_LENGTH - LAST_FOUR));
    result.push_str(last_four(number));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_and_last_four() {
        assert_eq!(bin("4111111111111111"), "411111");
        assert_eq!(last_four("4111111111111234"), "1234");
        assert_eq!(bin("4111"), "4111");
        assert_eq!(last_four("123"), "123");
        assert_eq!(bin(""), "");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn test_mask_with_bin_16_digits() {
        assert_eq!(mask_with_bin("4111111111111111"), "411111******1111");
    }

    #[test]
    fn test_mask_with_bin_19_digits() {
        assert_eq!(mask_with_bin("6205500000000000004"), "620550*********0004");
    }

    #[test]
    fn test_mask_short_number_hides_bin() {
        assert_eq!(mask_with_bin("4111111111"), "******1111");
        assert_eq!(mask_with_bin("1234"), "****");
    }

    #[test]
    fn test_mask_last_four() {
        assert_eq!(mask_last_four("378282246310005"), "***********0005");
        assert_eq!(mask_last_four(""), "");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let masked = mask_with_bin("4111١١١١١١١١١١١١");
        assert!(masked.starts_with("4111١١"));
        assert!(masked.ends_with("١١١١"));
    }
}
