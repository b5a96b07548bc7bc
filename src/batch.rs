//! Batch processing for high-throughput card validation.
//!
//! A [`BatchValidator`] runs many cards through one registry. With the
//! `parallel` feature the work is spread over rayon's thread pool; results
//! are identical to calling [`SchemeRegistry::validate`] per card.

use crate::card::Card;
use crate::error::ValidationError;
use crate::registry::SchemeRegistry;
use crate::scheme::SchemeInfo;

/// Batch validator borrowing a registry.
///
/// # Example
///
/// ```
/// use cc_schemes::{BatchValidator, Card, SchemeRegistry};
///
/// let registry = SchemeRegistry::new();
/// let batch = BatchValidator::new(&registry);
/// let cards = [
///     Card::new("4111111111111111"),
///     Card::new("5555555555554444"),
///     Card::new("4111111111111112"),
/// ];
///
/// let results = batch.validate_all(&cards);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_ok());
/// assert!(results[2].is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchValidator<'r> {
    registry: &'r SchemeRegistry,
}

impl<'r> BatchValidator<'r> {
    /// Creates a batch validator over `registry`.
    #[inline]
    pub fn new(registry: &'r SchemeRegistry) -> Self {
        Self { registry }
    }

    /// Validates every card, returning results in input order.
    pub fn validate_all(&self, cards: &[Card]) -> Vec<Result<SchemeInfo, ValidationError>> {
        cards.iter().map(|c| self.registry.validate(c)).collect()
    }

    /// Validates every card and keeps only the matched schemes of valid ones.
    pub fn validate_valid_only(&self, cards: &[Card]) -> Vec<SchemeInfo> {
        cards
            .iter()
            .filter_map(|c| self.registry.validate(c).ok())
            .collect()
    }

    /// Validates every card and partitions into valid and invalid.
    ///
    /// Returns `(valid, invalid)`, each tagged with the card's input index.
    #[allow(clippy::type_complexity)]
    pub fn validate_partitioned(
        &self,
        cards: &[Card],
    ) -> (Vec<(usize, SchemeInfo)>, Vec<(usize, ValidationError)>) {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (i, card) in cards.iter().enumerate() {
            match self.registry.validate(card) {
                Ok(scheme) => valid.push((i, scheme)),
                Err(e) => invalid.push((i, e)),
            }
        }

        (valid, invalid)
    }

    /// Counts valid and invalid cards without collecting results.
    ///
    /// Returns `(valid_count, invalid_count)`.
    pub fn count_valid(&self, cards: &[Card]) -> (usize, usize) {
        let valid = cards.iter().filter(|c| self.registry.is_valid(c)).count();
        (valid, cards.len() - valid)
    }

    /// Validates cards in parallel using rayon.
    ///
    /// Typically faster for large batches (>1000 cards) on multi-core
    /// systems. Results keep input order.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel(&self, cards: &[Card]) -> Vec<Result<SchemeInfo, ValidationError>> {
        use rayon::prelude::*;
        cards.par_iter().map(|c| self.registry.validate(c)).collect()
    }

    /// Counts valid and invalid cards in parallel.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn count_valid_parallel(&self, cards: &[Card]) -> (usize, usize) {
        use rayon::prelude::*;
        let valid = cards
            .par_iter()
            .filter(|c| self.registry.is_valid(c))
            .count();
        (valid, cards.len() - valid)
    }
}
