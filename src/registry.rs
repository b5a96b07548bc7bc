//! The scheme registry and its validation pipeline.
//!
//! A [`SchemeRegistry`] is an ordered table of [`Scheme`]s. Validation runs
//! the Luhn checksum first and then scans the table in registration order;
//! the first scheme whose matcher accepts the number wins.
//!
//! The table starts with Visa, Mastercard and American Express. Everything
//! else is configured through [`RegistryOption`]s applied in order at
//! construction time.
//!
//! # Example
//!
//! ```
//! use cc_schemes::{options, Card, SchemeId, SchemeRegistry, ValidationError};
//!
//! let registry = SchemeRegistry::builder()
//!     .with(options::register_discover())
//!     .with(options::unregister_scheme(SchemeId::AMEX))
//!     .build()
//!     .unwrap();
//!
//! let scheme = registry.validate(&Card::new("6011 1111 1111 1117").with_code(123)).unwrap();
//! assert_eq!(scheme.id, SchemeId::DISCOVER);
//!
//! let err = registry.validate(&Card::new("378282246310005")).unwrap_err();
//! assert_eq!(err, ValidationError::NoMatchingScheme);
//! ```

use crate::card::Card;
use crate::error::{RegistryError, ValidationError};
use crate::luhn;
use crate::network::Network;
use crate::scheme::{Scheme, SchemeId, SchemeInfo};
use tracing::{debug, trace};

/// One configuration step applied to a registry under construction.
///
/// Options run in order after the defaults are installed. The first option
/// that fails aborts construction and its error is returned.
///
/// Closures of the form `Fn(&mut SchemeRegistry) -> Result<(), RegistryError>`
/// are options too.
pub trait RegistryOption {
    /// Applies this option to `registry`.
    fn apply(&self, registry: &mut SchemeRegistry) -> Result<(), RegistryError>;
}

impl<F> RegistryOption for F
where
    F: Fn(&mut SchemeRegistry) -> Result<(), RegistryError>,
{
    fn apply(&self, registry: &mut SchemeRegistry) -> Result<(), RegistryError> {
        self(registry)
    }
}

/// Ordered table of card schemes.
///
/// `validate` takes `&self` and the table is only changed through `&mut self`,
/// so a built registry can be shared across threads for validation.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    schemes: Vec<Scheme>,
}

impl SchemeRegistry {
    /// Creates a registry holding the default networks (Visa, Mastercard,
    /// American Express, in that order).
    pub fn new() -> Self {
        Self {
            schemes: Network::DEFAULTS.iter().map(Network::scheme).collect(),
        }
    }

    /// Creates a registry holding no schemes at all.
    ///
    /// Every card validated against it fails with
    /// [`ValidationError::NoMatchingScheme`] (or a checksum error).
    pub fn empty() -> Self {
        Self {
            schemes: Vec::new(),
        }
    }

    /// Creates a default registry and applies `options` in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing option. Later options are not
    /// applied and the partially configured registry is dropped.
    pub fn with_options<I>(options: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: RegistryOption,
    {
        let mut registry = Self::new();
        for option in options {
            registry.configure(&option)?;
        }
        Ok(registry)
    }

    /// Starts a [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Appends a scheme to the end of the table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateScheme`] and leaves the table
    /// untouched if a scheme with the same id is already registered.
    pub fn register(&mut self, scheme: Scheme) -> Result<(), RegistryError> {
        if self.contains(scheme.id().as_str()) {
            return Err(RegistryError::DuplicateScheme {
                id: scheme.id().clone(),
            });
        }

        debug!(scheme = %scheme.id(), position = self.schemes.len(), "registered scheme");
        self.schemes.push(scheme);
        Ok(())
    }

    /// Removes the scheme with the given id.
    ///
    /// Removing an id that is not registered is a no-op. Returns the removed
    /// scheme, if there was one.
    pub fn unregister(&mut self, id: &str) -> Option<Scheme> {
        let position = self.schemes.iter().position(|s| s.is(id))?;
        debug!(scheme = id, "unregistered scheme");
        Some(self.schemes.remove(position))
    }

    /// Validates a card against the registry.
    ///
    /// 1. The number must pass the Luhn checksum.
    /// 2. The first scheme (in registration order) whose matcher accepts the
    ///    number is selected.
    /// 3. If the card has a security code, its digit count must equal the
    ///    selected scheme's code length. A mismatch does not fall through to
    ///    later schemes.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::ChecksumInvalid`] if step 1 fails
    /// - [`ValidationError::NoMatchingScheme`] if no scheme matches
    /// - [`ValidationError::SecurityCodeLengthMismatch`] if step 3 fails
    pub fn validate(&self, card: &Card) -> Result<SchemeInfo, ValidationError> {
        if !luhn::check(card.number()) {
            trace!(card = %card, "checksum failed");
            return Err(ValidationError::ChecksumInvalid);
        }

        let Some(scheme) = self.find(card.number()) else {
            trace!(card = %card, "no scheme matched");
            return Err(ValidationError::NoMatchingScheme);
        };

        if let Some(actual) = card.code_length() {
            let code = scheme.code();
            if !code.accepts_length(actual) {
                let expected = code.length as usize;
                trace!(card = %card, scheme = %scheme.id(), expected, actual, "security code length mismatch");
                return Err(ValidationError::SecurityCodeLengthMismatch {
                    scheme: scheme.info(),
                    expected,
                    actual,
                });
            }
        }

        trace!(card = %card, scheme = %scheme.id(), "card validated");
        Ok(scheme.info())
    }

    /// Returns true if `card` passes [`SchemeRegistry::validate`].
    #[inline]
    pub fn is_valid(&self, card: &Card) -> bool {
        self.validate(card).is_ok()
    }

    /// Returns the first scheme matching `number`, skipping the checksum and
    /// security code checks.
    ///
    /// Useful for showing a network logo while the number is still being
    /// typed.
    pub fn detect(&self, number: &str) -> Option<SchemeInfo> {
        self.find(number).map(Scheme::info)
    }

    /// Returns a snapshot of the registered schemes in scan order.
    ///
    /// The returned vector is independent of the registry.
    pub fn list(&self) -> Vec<SchemeInfo> {
        self.schemes.iter().map(Scheme::info).collect()
    }

    /// Returns a snapshot of the scheme with the given id.
    pub fn get(&self, id: &str) -> Option<SchemeInfo> {
        self.schemes.iter().find(|s| s.is(id)).map(Scheme::info)
    }

    /// Returns true if a scheme with the given id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.schemes.iter().any(|s| s.is(id))
    }

    /// Returns the ids of the registered schemes in scan order.
    pub fn ids(&self) -> impl Iterator<Item = &SchemeId> {
        self.schemes.iter().map(Scheme::id)
    }

    /// Returns the number of registered schemes.
    #[inline]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Returns true if no schemes are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    fn configure(&mut self, option: &dyn RegistryOption) -> Result<(), RegistryError> {
        option.apply(self).inspect_err(|err| {
            debug!(error = %err, "registry option failed, construction aborted");
        })
    }

    fn find(&self, number: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.is_match(number))
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects [`RegistryOption`]s and applies them in order on `build`.
///
/// # Example
///
/// ```
/// use cc_schemes::{options, Network, SchemeRegistry};
///
/// let registry = SchemeRegistry::builder()
///     .with(options::register_jcb())
///     .with(options::register_network(Network::Diners))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 5);
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    options: Vec<Box<dyn RegistryOption>>,
}

impl RegistryBuilder {
    /// Queues an option.
    #[must_use]
    pub fn with(mut self, option: impl RegistryOption + 'static) -> Self {
        self.options.push(Box::new(option));
        self
    }

    /// Builds a default registry and applies the queued options in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing option.
    pub fn build(self) -> Result<SchemeRegistry, RegistryError> {
        let mut registry = SchemeRegistry::new();
        for option in &self.options {
            registry.configure(option.as_ref())?;
        }
        Ok(registry)
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("options", &self.options.len())
            .finish()
    }
}
