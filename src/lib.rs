//! # cc_schemes
//!
//! Payment card scheme registry for Rust.
//!
//! ## Features
//!
//! - Luhn checksum validation
//! - Ordered, configurable registry of card networks (first match wins)
//! - Security code length checks per network
//! - Eight built-in networks, plus custom schemes
//! - Card number masking for display and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_schemes::{Card, SchemeId, SchemeRegistry, ValidationError};
//!
//! // Visa, Mastercard and American Express out of the box
//! let registry = SchemeRegistry::new();
//!
//! let scheme = registry.validate(&Card::new("4242 4242 4242 4242").with_code(123)).unwrap();
//! assert_eq!(scheme.id, SchemeId::VISA);
//!
//! // Amex wants a 4 digit code, and still tells you it was Amex
//! let err = registry.validate(&Card::new("378282246310005").with_code(123)).unwrap_err();
//! assert_eq!(err.scheme().unwrap().id, SchemeId::AMEX);
//!
//! // Checksum comes first
//! let err = registry.validate(&Card::new("4111111111111112")).unwrap_err();
//! assert_eq!(err, ValidationError::ChecksumInvalid);
//! ```
//!
//! ## Configuring the Registry
//!
//! ```rust
//! use cc_schemes::{options, Card, CodeName, Scheme, SchemeRegistry, SecurityCode};
//! use cc_schemes::matcher::PrefixMatcher;
//!
//! let store_card = Scheme::new(
//!     "store-card",
//!     "Store Card",
//!     SecurityCode::new(CodeName::Cvv, 3),
//!     [16],
//!     PrefixMatcher::new([16]).prefix("9"),
//! );
//!
//! let registry = SchemeRegistry::builder()
//!     .with(options::register_discover())
//!     .with(options::register_scheme(store_card))
//!     .build()
//!     .unwrap();
//!
//! let scheme = registry.validate(&Card::new("9999999999999995")).unwrap();
//! assert_eq!(scheme.name, "Store Card");
//!
//! // Same id twice is rejected and construction fails
//! assert!(SchemeRegistry::with_options([options::register_visa()]).is_err());
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Id | Prefix | Length | Code |
//! |---------|----|--------|--------|------|
//! | Visa | `visa` | 4 | 13, 16, 19 | CVV 3 |
//! | Mastercard | `mastercard` | 51-55, 2221-2720 | 16 | CVC 3 |
//! | American Express | `american-express` | 34, 37 | 15 | CID 4 |
//! | Diners Club | `diners-club` | 300-305, 36, 38 | 14, 16, 19 | CID 3 |
//! | Discover | `discover` | 6011, 644-649, 654-659, 622126-622925 | 16, 19 | CID 3 |
//! | JCB | `jcb` | 2131, 1800, 35 | 15-19 | CID 3 |
//! | UnionPay | `unionpay` | 62 | 16-19 | CVN 3 |
//! | Maestro | `maestro` | 5018, 5020, 5038, 6304, 6759, 6761, 6763 | 12-19 | CID 3 |
//!
//! The first three are registered by default, in that order.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `config` | JSON network configuration, serde for scheme snapshots |
//! | `parallel` | Rayon-based batch validation |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - `Card` numbers are zeroized on drop
//! - `Debug` and `Display` show masked numbers only
//! - Log events only ever carry masked numbers
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod matcher;
pub mod network;
pub mod options;
pub mod registry;
pub mod scheme;

// Re-export main types at crate root
pub use batch::BatchValidator;
pub use card::Card;
pub use error::{RegistryError, ValidationError};
pub use matcher::Matcher;
pub use network::Network;
pub use registry::{RegistryBuilder, RegistryOption, SchemeRegistry};
pub use scheme::{CodeName, Scheme, SchemeId, SchemeInfo, SecurityCode};

#[cfg(feature = "config")]
pub use config::{ConfigError, NetworkConfig};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA: &str = "4242424242424242";
    const MASTERCARD: &str = "5555555555554444";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011000990139424";

    #[test]
    fn test_default_registry() {
        let registry = SchemeRegistry::new();
        assert_eq!(
            registry.validate(&Card::new(VISA).with_code(123)).unwrap().id,
            SchemeId::VISA
        );
        assert_eq!(
            registry.validate(&Card::new(MASTERCARD).with_code(123)).unwrap().id,
            SchemeId::MASTERCARD
        );
        assert_eq!(
            registry.validate(&Card::new(AMEX).with_code(1234)).unwrap().id,
            SchemeId::AMEX
        );
        assert_eq!(
            registry.validate(&Card::new(DISCOVER)),
            Err(ValidationError::NoMatchingScheme)
        );
    }

    #[test]
    fn test_every_network_registrable() {
        let registry = SchemeRegistry::with_options([
            options::register_diners(),
            options::register_discover(),
            options::register_jcb(),
            options::register_union_pay(),
            options::register_maestro(),
        ])
        .unwrap();
        let ids: Vec<SchemeId> = registry.ids().cloned().collect();
        let expected: Vec<SchemeId> = Network::ALL.iter().map(Network::id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemeRegistry>();
        assert_send_sync::<Card>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<RegistryError>();
        assert_send_sync::<BatchValidator<'static>>();
    }
}
