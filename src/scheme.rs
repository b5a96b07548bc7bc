//! Scheme definitions: identity, metadata and matcher of one card network.
//!
//! A [`Scheme`] is what the registry stores and scans. A [`SchemeInfo`] is
//! the matcher-free snapshot handed back to callers, so nothing a caller
//! holds can change how the registry matches numbers.

use crate::matcher::Matcher;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Stable machine-readable key of a scheme, unique within a registry.
///
/// Built-in networks have associated constants; custom schemes can use any
/// string.
///
/// # Example
///
/// ```
/// use cc_schemes::SchemeId;
///
/// assert_eq!(SchemeId::VISA, "visa");
/// assert_eq!(SchemeId::from("store-card").as_str(), "store-card");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SchemeId(Cow<'static, str>);

impl SchemeId {
    /// Visa.
    pub const VISA: Self = Self(Cow::Borrowed("visa"));
    /// Mastercard.
    pub const MASTERCARD: Self = Self(Cow::Borrowed("mastercard"));
    /// American Express.
    pub const AMEX: Self = Self(Cow::Borrowed("american-express"));
    /// Diners Club.
    pub const DINERS: Self = Self(Cow::Borrowed("diners-club"));
    /// Discover.
    pub const DISCOVER: Self = Self(Cow::Borrowed("discover"));
    /// JCB.
    pub const JCB: Self = Self(Cow::Borrowed("jcb"));
    /// UnionPay.
    pub const UNION_PAY: Self = Self(Cow::Borrowed("unionpay"));
    /// Maestro.
    pub const MAESTRO: Self = Self(Cow::Borrowed("maestro"));

    /// Creates an id from a static string without allocating.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SchemeId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl From<String> for SchemeId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl AsRef<str> for SchemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SchemeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SchemeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Name printed next to the security code on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CodeName {
    /// Card Verification Value (Visa).
    Cvv,
    /// Card Validation Code (Mastercard).
    Cvc,
    /// Card Verification Number (UnionPay).
    Cvn,
    /// Card Identification Number (American Express, Discover).
    Cid,
}

impl CodeName {
    /// Returns the conventional upper-case abbreviation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cvv => "CVV",
            Self::Cvc => "CVC",
            Self::Cvn => "CVN",
            Self::Cid => "CID",
        }
    }
}

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security code convention of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityCode {
    /// What the code is called.
    pub name: CodeName,
    /// Expected number of digits.
    pub length: u8,
}

impl SecurityCode {
    /// Creates a security code convention.
    pub const fn new(name: CodeName, length: u8) -> Self {
        Self { name, length }
    }

    /// Returns true if a code with `digits` digits fits this convention.
    #[inline]
    pub const fn accepts_length(&self, digits: usize) -> bool {
        self.length as usize == digits
    }
}

/// One card network as stored in a registry.
///
/// `lengths` is descriptive: the matcher alone decides membership, and for
/// the built-in networks the pattern already encodes the length.
///
/// Cloning is cheap; the matcher is shared.
///
/// # Example
///
/// ```
/// use cc_schemes::{CodeName, Scheme, SecurityCode};
/// use cc_schemes::matcher::PrefixMatcher;
///
/// let store = Scheme::new(
///     "store-card",
///     "Store Card",
///     SecurityCode::new(CodeName::Cvv, 3),
///     [16],
///     PrefixMatcher::new([16]).prefix("9"),
/// );
/// assert!(store.is_match("9999999999999995"));
/// assert!(store.is("store-card"));
/// ```
#[derive(Clone)]
pub struct Scheme {
    id: SchemeId,
    name: Cow<'static, str>,
    lengths: Vec<u8>,
    code: SecurityCode,
    matcher: Arc<dyn Matcher>,
}

impl Scheme {
    /// Creates a scheme from its metadata and matcher.
    pub fn new(
        id: impl Into<SchemeId>,
        name: impl Into<Cow<'static, str>>,
        code: SecurityCode,
        lengths: impl Into<Vec<u8>>,
        matcher: impl Matcher + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lengths: lengths.into(),
            code,
            matcher: Arc::new(matcher),
        }
    }

    /// Creates a scheme matched by a regular expression.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn with_pattern(
        id: impl Into<SchemeId>,
        name: impl Into<Cow<'static, str>>,
        code: SecurityCode,
        lengths: impl Into<Vec<u8>>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        let re = regex::Regex::new(pattern)?;
        Ok(Self::new(id, name, code, lengths, re))
    }

    /// Returns the scheme id.
    #[inline]
    pub fn id(&self) -> &SchemeId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card number lengths this network issues.
    #[inline]
    pub fn lengths(&self) -> &[u8] {
        &self.lengths
    }

    /// Returns the security code convention.
    #[inline]
    pub fn code(&self) -> SecurityCode {
        self.code
    }

    /// Returns true if this scheme's id is `id`.
    #[inline]
    pub fn is(&self, id: &str) -> bool {
        self.id == *id
    }

    /// Runs the matcher against a card number.
    #[inline]
    pub fn is_match(&self, number: &str) -> bool {
        self.matcher.is_match(number)
    }

    /// Returns a matcher-free snapshot of this scheme.
    pub fn info(&self) -> SchemeInfo {
        SchemeInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            lengths: self.lengths.clone(),
            code: self.code,
        }
    }
}

impl fmt::Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("lengths", &self.lengths)
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot of a scheme, as returned by validation and listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemeInfo {
    /// Scheme id.
    pub id: SchemeId,
    /// Display name.
    pub name: Cow<'static, str>,
    /// Card number lengths the network issues.
    pub lengths: Vec<u8>,
    /// Security code convention.
    pub code: SecurityCode,
}

impl SchemeInfo {
    /// Returns true if this snapshot's id is `id`.
    #[inline]
    pub fn is(&self, id: &str) -> bool {
        self.id == *id
    }
}

impl fmt::Display for SchemeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::PrefixMatcher;

    fn store_card() -> Scheme {
        Scheme::new(
            "store-card",
            "Store Card",
            SecurityCode::new(CodeName::Cvv, 3),
            [16],
            PrefixMatcher::new([16]).prefix("9"),
        )
    }

    #[test]
    fn test_scheme_id_comparisons() {
        assert_eq!(SchemeId::AMEX, "american-express");
        assert_eq!(SchemeId::from("jcb".to_string()), SchemeId::JCB);
        assert_eq!(SchemeId::from_static("maestro"), SchemeId::MAESTRO);
        assert_eq!(SchemeId::UNION_PAY.to_string(), "unionpay");
    }

    #[test]
    fn test_code_name_display() {
        assert_eq!(CodeName::Cvv.to_string(), "CVV");
        assert_eq!(CodeName::Cid.as_str(), "CID");
    }

    #[test]
    fn test_security_code_length() {
        let cid = SecurityCode::new(CodeName::Cid, 4);
        assert!(cid.accepts_length(4));
        assert!(!cid.accepts_length(3));
    }

    #[test]
    fn test_scheme_accessors() {
        let scheme = store_card();
        assert_eq!(scheme.id(), &SchemeId::from("store-card"));
        assert_eq!(scheme.name(), "Store Card");
        assert_eq!(scheme.lengths(), &[16u8]);
        assert_eq!(scheme.code().length, 3);
        assert!(scheme.is("store-card"));
        assert!(!scheme.is("visa"));
    }

    #[test]
    fn test_with_pattern() {
        let scheme = Scheme::with_pattern(
            "nines",
            "Nines",
            SecurityCode::new(CodeName::Cvv, 3),
            [16],
            r"^9\d{15}$",
        )
        .unwrap();
        assert!(scheme.is_match("9999999999999995"));
        assert!(!scheme.is_match("999999999999999"));
    }

    #[test]
    fn test_with_pattern_rejects_bad_regex() {
        let result = Scheme::with_pattern(
            "broken",
            "Broken",
            SecurityCode::new(CodeName::Cvv, 3),
            [16],
            r"^(9",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_info_snapshot() {
        let scheme = store_card();
        let mut info = scheme.info();
        assert_eq!(info.id, "store-card");
        assert_eq!(info.to_string(), "Store Card");

        info.lengths.push(19);
        assert_eq!(scheme.lengths(), &[16u8]);
    }

    #[test]
    fn test_debug_omits_matcher() {
        let debug = format!("{:?}", store_card());
        assert!(debug.contains("store-card"));
        assert!(debug.contains(".."));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scheme>();
        assert_send_sync::<SchemeInfo>();
    }
}
