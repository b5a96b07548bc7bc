//! The card value consumed by the scheme registry.
//!
//! A [`Card`] is a digit string plus an optional security code. It does no
//! validation of its own: the registry decides whether the number is well
//! formed.

use std::fmt;
use zeroize::Zeroize;

/// A payment card number with an optional security code.
///
/// All whitespace is stripped from the number at construction. Nothing else
/// is normalized, so separators such as `-` stay in place and make the
/// checksum fail later on.
///
/// # Security
///
/// - The number is zeroed on drop using the `zeroize` crate
/// - `Debug` and `Display` only ever show the masked number
/// - The security code is never printed
///
/// # Example
///
/// ```
/// use cc_schemes::Card;
///
/// let card = Card::new("4242 4242 4242 4242").with_code(123);
/// assert_eq!(card.number(), "4242424242424242");
/// assert_eq!(card.code(), Some(123));
/// assert_eq!(card.masked(), "424242******4242");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Card {
    number: String,
    code: Option<u32>,
}

impl Card {
    /// Creates a card from a number, removing every whitespace character.
    pub fn new(number: &str) -> Self {
        Self {
            number: number.chars().filter(|c| !c.is_whitespace()).collect(),
            code: None,
        }
    }

    /// Attaches a security code (CVV/CVC/CID/CVN).
    ///
    /// The code is stored as a number, so leading zeros are lost: a printed
    /// `012` becomes `12` and counts as two digits, which fails a scheme
    /// expecting three. See [`Card::code_length`].
    #[must_use]
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns the card number.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// [`Card::masked`] for display.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the security code, if any.
    #[inline]
    pub const fn code(&self) -> Option<u32> {
        self.code
    }

    /// Returns the number of decimal digits in the security code.
    ///
    /// The code is numeric, so leading zeros are not preserved: `7` is one
    /// digit even if the printed code was `007`.
    pub fn code_length(&self) -> Option<usize> {
        self.code.map(digit_count)
    }

    /// Returns the number of characters in the card number.
    #[inline]
    pub fn length(&self) -> usize {
        self.number.chars().count()
    }

    /// Returns the BIN (first 6 characters).
    #[inline]
    pub fn bin(&self) -> &str {
        crate::mask::bin(&self.number)
    }

    /// Returns the last four characters.
    #[inline]
    pub fn last_four(&self) -> &str {
        crate::mask::last_four(&self.number)
    }

    /// Returns the number with the BIN and last four visible.
    ///
    /// Format: `411111******1111`
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_with_bin(&self.number)
    }
}

fn digit_count(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &self.masked())
            .field("code", &self.code.map(|_| "***"))
            .finish()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl From<&str> for Card {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl Drop for Card {
    fn drop(&mut self) {
        self.number.zeroize();
        self.code.zeroize();
    }
}
