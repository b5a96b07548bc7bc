//! Ready-made [`RegistryOption`]s.
//!
//! ```
//! use cc_schemes::{options, Card, SchemeRegistry};
//!
//! let registry = SchemeRegistry::with_options([
//!     options::register_discover(),
//!     options::register_jcb(),
//!     options::register_union_pay(),
//! ])
//! .unwrap();
//!
//! assert!(registry.is_valid(&Card::new("3566002020360505").with_code(123)));
//! ```

use crate::error::RegistryError;
use crate::network::Network;
use crate::registry::{RegistryOption, SchemeRegistry};
use crate::scheme::{Scheme, SchemeId};

/// Registers a scheme; fails if its id is already present.
#[derive(Debug, Clone)]
pub struct RegisterScheme(Scheme);

impl RegistryOption for RegisterScheme {
    fn apply(&self, registry: &mut SchemeRegistry) -> Result<(), RegistryError> {
        registry.register(self.0.clone())
    }
}

/// Unregisters a scheme by id; never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterScheme(SchemeId);

impl RegistryOption for UnregisterScheme {
    fn apply(&self, registry: &mut SchemeRegistry) -> Result<(), RegistryError> {
        registry.unregister(self.0.as_str());
        Ok(())
    }
}

/// Returns an option that appends `scheme` to the registry.
///
/// Applying it fails with [`RegistryError::DuplicateScheme`] if a scheme
/// with the same id is already registered.
pub fn register_scheme(scheme: Scheme) -> RegisterScheme {
    RegisterScheme(scheme)
}

/// Returns an option that removes the scheme with the given id, if present.
pub fn unregister_scheme(id: impl Into<SchemeId>) -> UnregisterScheme {
    UnregisterScheme(id.into())
}

/// Returns an option that registers a built-in network.
pub fn register_network(network: Network) -> RegisterScheme {
    RegisterScheme(network.scheme())
}

/// Registers Visa.
///
/// Visa is a default; this is only useful after unregistering it, e.g. to
/// move it behind a custom scheme.
pub fn register_visa() -> RegisterScheme {
    register_network(Network::Visa)
}

/// Registers Mastercard (a default, see [`register_visa`]).
pub fn register_mastercard() -> RegisterScheme {
    register_network(Network::Mastercard)
}

/// Registers American Express (a default, see [`register_visa`]).
pub fn register_amex() -> RegisterScheme {
    register_network(Network::Amex)
}

/// Registers Diners Club.
pub fn register_diners() -> RegisterScheme {
    register_network(Network::Diners)
}

/// Registers Discover.
pub fn register_discover() -> RegisterScheme {
    register_network(Network::Discover)
}

/// Registers JCB.
pub fn register_jcb() -> RegisterScheme {
    register_network(Network::Jcb)
}

/// Registers UnionPay.
pub fn register_union_pay() -> RegisterScheme {
    register_network(Network::UnionPay)
}

/// Registers Maestro.
pub fn register_maestro() -> RegisterScheme {
    register_network(Network::Maestro)
}
