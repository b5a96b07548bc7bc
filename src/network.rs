//! Built-in card networks.
//!
//! Each [`Network`] carries its id, display name, security code convention,
//! issued lengths and pattern in one place, so the pattern and the metadata
//! cannot drift apart.
//!
//! Patterns are compiled once per process on first use and never mutated.

use crate::scheme::{CodeName, Scheme, SchemeId, SecurityCode};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VISA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4\d{12}(?:\d{3}){0,2}$").expect("Invalid Visa regex"));

static MASTERCARD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:5[1-5]\d{14}|2(?:22[1-9]\d{12}|2[3-9]\d{13}|[3-6]\d{14}|7[01]\d{13}|720\d{12}))$",
    )
    .expect("Invalid Mastercard regex")
});

static AMEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3[47]\d{13}$").expect("Invalid American Express regex"));

static DINERS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^3(?:0[0-5]|[68]\d)\d{11}(?:\d{2}|\d{5})?$").expect("Invalid Diners Club regex")
});

static DISCOVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:6011\d{12}|64[4-9]\d{13}|65[4-9]\d{13}|622(?:12[6-9]|1[3-9]\d|[2-8]\d\d|9[01]\d|92[0-5])\d{10})(?:\d{3})?$",
    )
    .expect("Invalid Discover regex")
});

static JCB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:2131|1800)\d{11}|35\d{14,17})$").expect("Invalid JCB regex")
});

static UNION_PAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^62\d{14,17}$").expect("Invalid UnionPay regex"));

static MAESTRO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:5018|5020|5038|6304|6759|6761|6763)\d{8,15}$").expect("Invalid Maestro regex")
});

/// The card networks this crate knows out of the box.
///
/// A default registry holds [`Network::DEFAULTS`]; the rest are opt-in via
/// [`crate::options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Network {
    /// Visa - Prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    #[cfg_attr(feature = "serde", serde(rename = "american-express", alias = "amex"))]
    Amex,
    /// Diners Club - Prefix 300-305, 36, 38, lengths 14, 16, 19
    #[cfg_attr(feature = "serde", serde(rename = "diners-club", alias = "diners"))]
    Diners,
    /// Discover - Prefix 6011, 644-649, 654-659, 622126-622925, lengths 16, 19
    Discover,
    /// JCB - Prefix 2131, 1800 (15 digits), 35 (16-19 digits)
    Jcb,
    /// UnionPay - Prefix 62, length 16-19
    #[cfg_attr(feature = "serde", serde(rename = "unionpay"))]
    UnionPay,
    /// Maestro - Prefix 5018, 5020, 5038, 6304, 6759, 6761, 6763, length 12-19
    Maestro,
}

impl Network {
    /// Networks registered by [`crate::SchemeRegistry::new`], in scan order.
    pub const DEFAULTS: [Network; 3] = [Network::Visa, Network::Mastercard, Network::Amex];

    /// Every built-in network.
    pub const ALL: [Network; 8] = [
        Network::Visa,
        Network::Mastercard,
        Network::Amex,
        Network::Diners,
        Network::Discover,
        Network::Jcb,
        Network::UnionPay,
        Network::Maestro,
    ];

    /// Returns the scheme id of this network.
    pub const fn id(&self) -> SchemeId {
        match self {
            Self::Visa => SchemeId::VISA,
            Self::Mastercard => SchemeId::MASTERCARD,
            Self::Amex => SchemeId::AMEX,
            Self::Diners => SchemeId::DINERS,
            Self::Discover => SchemeId::DISCOVER,
            Self::Jcb => SchemeId::JCB,
            Self::UnionPay => SchemeId::UNION_PAY,
            Self::Maestro => SchemeId::MAESTRO,
        }
    }

    /// Returns a human-readable name for the network.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Diners => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Maestro => "Maestro",
        }
    }

    /// Returns the card number lengths the network issues.
    pub const fn lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Diners => &[14, 16, 19],
            Self::Discover => &[16, 19],
            Self::Jcb => &[15, 16, 17, 18, 19],
            Self::UnionPay => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    /// Returns the security code convention.
    ///
    /// American Express prints a 4 digit CID on the front; everyone else
    /// uses 3 digits on the back.
    pub const fn code(&self) -> SecurityCode {
        match self {
            Self::Visa => SecurityCode::new(CodeName::Cvv, 3),
            Self::Mastercard => SecurityCode::new(CodeName::Cvc, 3),
            Self::Amex => SecurityCode::new(CodeName::Cid, 4),
            Self::UnionPay => SecurityCode::new(CodeName::Cvn, 3),
            Self::Diners | Self::Discover | Self::Jcb | Self::Maestro => {
                SecurityCode::new(CodeName::Cid, 3)
            }
        }
    }

    /// Returns the compiled pattern for this network.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Self::Visa => &*VISA_PATTERN,
            Self::Mastercard => &*MASTERCARD_PATTERN,
            Self::Amex => &*AMEX_PATTERN,
            Self::Diners => &*DINERS_PATTERN,
            Self::Discover => &*DISCOVER_PATTERN,
            Self::Jcb => &*JCB_PATTERN,
            Self::UnionPay => &*UNION_PAY_PATTERN,
            Self::Maestro => &*MAESTRO_PATTERN,
        }
    }

    /// Builds the registry scheme for this network.
    pub fn scheme(&self) -> Scheme {
        // Regex clones share the compiled program.
        Scheme::new(
            self.id(),
            self.name(),
            self.code(),
            self.lengths(),
            self.pattern().clone(),
        )
    }

    /// Looks up a built-in network by scheme id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.id() == *id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
