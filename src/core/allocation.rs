//! Patient identifier allocation
//!
//! Derives the next unique identifier for a new patient within a location's
//! namespace. The sequence arithmetic is pure and unit-tested on its own;
//! the allocator wires it to the location table and the datastore scan.
//!
//! Allocation alone is not atomic with the subsequent patient insert - the
//! registration flow closes that race by retrying on insert conflict (see
//! [`crate::core::registration`]).

use crate::adapters::database::IntakeStore;
use crate::domain::ids::PatientId;
use crate::domain::locations::LocationPrefixMap;
use crate::domain::{IntakeError, Result};
use std::sync::Arc;

/// Derives the next identifier in a namespace from its existing identifiers
///
/// The greatest existing identifier is determined by treating the suffix
/// after `prefix` as an integer, never by string ordering, so unevenly
/// padded legacy identifiers (`HERO010` vs `HERO100`) compare correctly.
/// With no existing identifier the sequence starts at 1. The suffix renders
/// zero-padded to a minimum of three digits and grows past 999 without
/// truncation.
///
/// # Errors
///
/// Returns [`IntakeError::CorruptSequence`] when an existing identifier in
/// the namespace has a suffix that does not parse as a non-negative
/// integer; the sequence is never silently reset.
pub fn next_identifier(prefix: &str, existing: &[String]) -> Result<PatientId> {
    let mut greatest: u64 = 0;

    for identifier in existing {
        // The scan is prefix-filtered already; skip anything foreign that
        // slips through rather than corrupting the sequence over it.
        let Some(suffix) = identifier.strip_prefix(prefix) else {
            continue;
        };

        let value: u64 = suffix
            .parse()
            .map_err(|_| IntakeError::CorruptSequence {
                prefix: prefix.to_string(),
                identifier: identifier.clone(),
            })?;

        greatest = greatest.max(value);
    }

    let next = greatest + 1;
    let rendered = format!("{prefix}{next:03}");
    PatientId::new(rendered).map_err(IntakeError::Validation)
}

/// Allocates location-prefixed patient identifiers
///
/// Stateless between calls; every allocation re-reads the namespace from
/// the datastore. The location table is injected once at construction.
pub struct PatientIdentifierAllocator {
    store: Arc<dyn IntakeStore>,
    locations: LocationPrefixMap,
}

impl PatientIdentifierAllocator {
    /// Creates an allocator over the given store and location table
    pub fn new(store: Arc<dyn IntakeStore>, locations: LocationPrefixMap) -> Self {
        Self { store, locations }
    }

    /// The injected location table
    pub fn locations(&self) -> &LocationPrefixMap {
        &self.locations
    }

    /// Allocates the next identifier for a new patient at a location
    ///
    /// Performs no write; persisting the patient row under the returned
    /// identifier is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// - [`IntakeError::InvalidLocation`] when the location is not mapped
    /// - [`IntakeError::CorruptSequence`] when the namespace holds a
    ///   malformed identifier
    pub async fn allocate(&self, location: &str) -> Result<PatientId> {
        let prefix = self.locations.resolve(location)?;

        let existing = self.store.identifiers_with_prefix(prefix).await?;
        let id = next_identifier(prefix, &existing)?;

        tracing::debug!(
            location = %location,
            prefix = %prefix,
            existing = existing.len(),
            allocated = %id,
            "Allocated patient identifier"
        );

        Ok(id)
    }
}
