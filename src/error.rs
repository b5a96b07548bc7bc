//! Error types for registry construction and card validation.
//!
//! Every failure is a typed value returned to the caller. Nothing here is
//! transient, so there is no retry anywhere in the crate.

use crate::scheme::{SchemeId, SchemeInfo};
use std::fmt;

/// Errors raised while building or mutating a [`crate::SchemeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A scheme with this id is already registered.
    DuplicateScheme {
        /// The id that was already present.
        id: SchemeId,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateScheme { id } => {
                write!(f, "scheme '{}' is already registered", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Reasons a card fails validation against a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The Luhn checksum failed, or the number contains non-digits.
    ///
    /// No scheme is consulted when this happens.
    ChecksumInvalid,

    /// The checksum passed but no registered scheme matched the number.
    NoMatchingScheme,

    /// A scheme matched but the security code has the wrong number of digits.
    ///
    /// Carries the matched scheme so callers can say which network
    /// rejected the code.
    SecurityCodeLengthMismatch {
        /// The scheme that matched the card number.
        scheme: SchemeInfo,
        /// Digits the scheme expects.
        expected: usize,
        /// Digits the card's code has.
        actual: usize,
    },
}

impl ValidationError {
    /// Returns the matched scheme, if the failure happened after matching.
    pub fn scheme(&self) -> Option<&SchemeInfo> {
        match self {
            Self::SecurityCodeLengthMismatch { scheme, .. } => Some(scheme),
            Self::ChecksumInvalid | Self::NoMatchingScheme => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChecksumInvalid => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }

            Self::NoMatchingScheme => {
                write!(f, "no registered scheme matches the card number")
            }

            Self::SecurityCodeLengthMismatch {
                scheme,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} cards require a {} digit {}, got {}",
                    scheme.name, expected, scheme.code.name, actual
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
