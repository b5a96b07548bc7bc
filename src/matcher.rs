//! Predicates that decide network membership for a card number.
//!
//! A scheme owns exactly one [`Matcher`]. Built-in networks use compiled
//! regular expressions; callers can also use prefix ranges (the BIN/IIN
//! style of matching) or a plain closure.

use regex::Regex;

/// Decides whether a card number belongs to a scheme.
///
/// Matchers must be shareable across threads so a registry can be used from
/// many validation workers at once.
pub trait Matcher: Send + Sync {
    /// Returns true if `number` belongs to the scheme.
    fn is_match(&self, number: &str) -> bool;
}

impl Matcher for Regex {
    #[inline]
    fn is_match(&self, number: &str) -> bool {
        Regex::is_match(self, number)
    }
}

impl<F> Matcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    #[inline]
    fn is_match(&self, number: &str) -> bool {
        self(number)
    }
}

/// Matches digit-only numbers by length and BIN/IIN prefix ranges.
///
/// A number matches when it is all ASCII digits, its length is one of the
/// configured lengths, and its leading digits fall in at least one of the
/// inclusive prefix ranges.
///
/// # Example
///
/// ```
/// use cc_schemes::matcher::{Matcher, PrefixMatcher};
///
/// // Mastercard: 51-55 and 2221-2720, 16 digits
/// let mc = PrefixMatcher::new([16])
///     .range("51", "55")
///     .range("2221", "2720");
///
/// assert!(mc.is_match("5555555555554444"));
/// assert!(mc.is_match("2223003122003222"));
/// assert!(!mc.is_match("4111111111111111"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatcher {
    lengths: Vec<u8>,
    ranges: Vec<(String, String)>,
}

impl PrefixMatcher {
    /// Creates a matcher accepting the given lengths and no prefixes yet.
    pub fn new(lengths: impl Into<Vec<u8>>) -> Self {
        Self {
            lengths: lengths.into(),
            ranges: Vec::new(),
        }
    }

    /// Accepts numbers starting with `prefix`.
    #[must_use]
    pub fn prefix(self, prefix: &str) -> Self {
        self.range(prefix, prefix)
    }

    /// Accepts numbers whose leading digits lie in `start..=end`.
    ///
    /// Both bounds are compared against the first `start.len()` digits of
    /// the number, so they should have the same number of digits.
    #[must_use]
    pub fn range(mut self, start: &str, end: &str) -> Self {
        self.ranges.push((start.to_owned(), end.to_owned()));
        self
    }

    /// Returns the accepted lengths.
    pub fn lengths(&self) -> &[u8] {
        &self.lengths
    }
}

impl Matcher for PrefixMatcher {
    fn is_match(&self, number: &str) -> bool {
        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if !self.lengths.iter().any(|&l| l as usize == number.len()) {
            return false;
        }

        // Equal-length ASCII digit strings order the same way as their values.
        self.ranges.iter().any(|(start, end)| {
            number
                .get(..start.len())
                .is_some_and(|head| start.as_str() <= head && head <= end.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_matcher() {
        let re = Regex::new(r"^3[47]\d{13}$").unwrap();
        let matcher: &dyn Matcher = &re;
        assert!(matcher.is_match("378282246310005"));
        assert!(!matcher.is_match("37828224631000"));
    }

    #[test]
    fn test_closure_matcher() {
        let matcher = |n: &str| n.starts_with("9");
        assert!(Matcher::is_match(&matcher, "9999999999999995"));
        assert!(!Matcher::is_match(&matcher, "4111111111111111"));
    }

    #[test]
    fn test_prefix_matcher_single_prefix() {
        let visa = PrefixMatcher::new([13, 16, 19]).prefix("4");
        assert!(visa.is_match("4222222222222"));
        assert!(visa.is_match("4242424242424242"));
        assert!(visa.is_match("4111111111111111110"));
        assert!(!visa.is_match("42424242424242"));
        assert!(!visa.is_match("5242424242424242"));
    }

    #[test]
    fn test_prefix_matcher_range_bounds() {
        let mc = PrefixMatcher::new([16]).range("2221", "2720");
        assert!(mc.is_match("2221000000000000"));
        assert!(mc.is_match("2720000000000000"));
        assert!(!mc.is_match("2220999999999999"));
        assert!(!mc.is_match("2721000000000000"));
    }

    #[test]
    fn test_prefix_matcher_rejects_non_digits() {
        let visa = PrefixMatcher::new([16]).prefix("4");
        assert!(!visa.is_match("4242-42424242424"));
        assert!(!visa.is_match("424242424242424x"));
    }

    #[test]
    fn test_prefix_matcher_without_ranges_matches_nothing() {
        let empty = PrefixMatcher::new([16]);
        assert!(!empty.is_match("4242424242424242"));
        assert_eq!(empty.lengths(), &[16u8]);
    }
}
