//! Location prefix mapping
//!
//! A closed, immutable mapping from human-readable care-location names to
//! the short alphabetic prefixes used in patient identifier generation. The
//! table is built once from configuration at process start and injected into
//! the allocator; a location missing from the table is rejected, never
//! defaulted.

use crate::domain::errors::IntakeError;
use crate::domain::result::Result;
use std::collections::BTreeMap;

/// Closed location -> identifier-prefix table
#[derive(Debug, Clone)]
pub struct LocationPrefixMap {
    prefixes: BTreeMap<String, String>,
}

impl LocationPrefixMap {
    /// Builds the map from configured (location, prefix) pairs
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the table is empty, a location
    /// name is blank, a prefix is empty or non-alphabetic, or one prefix is
    /// a leading substring of another (which would merge two identifier
    /// namespaces during the max-identifier scan).
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut prefixes = BTreeMap::new();

        for (location, prefix) in pairs {
            if location.trim().is_empty() {
                return Err(IntakeError::Configuration(
                    "Location name cannot be empty".to_string(),
                ));
            }
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(IntakeError::Configuration(format!(
                    "Location prefix for '{location}' must be non-empty and alphabetic, got '{prefix}'"
                )));
            }
            prefixes.insert(location, prefix.to_ascii_uppercase());
        }

        if prefixes.is_empty() {
            return Err(IntakeError::Configuration(
                "Location prefix map cannot be empty".to_string(),
            ));
        }

        let values: Vec<&String> = prefixes.values().collect();
        for (i, a) in values.iter().enumerate() {
            for b in values.iter().skip(i + 1) {
                if a.starts_with(b.as_str()) || b.starts_with(a.as_str()) {
                    return Err(IntakeError::Configuration(format!(
                        "Location prefixes '{a}' and '{b}' overlap; namespaces must be disjoint"
                    )));
                }
            }
        }

        Ok(Self { prefixes })
    }

    /// Resolves a location name to its identifier prefix
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocation` for any name not present in the table.
    pub fn resolve(&self, location: &str) -> Result<&str> {
        self.prefixes
            .get(location)
            .map(String::as_str)
            .ok_or_else(|| IntakeError::InvalidLocation(location.to_string()))
    }

    /// Iterates the known location names in sorted order
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.prefixes.keys().map(String::as_str)
    }

    /// Number of mapped locations
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether the table is empty (never true for a constructed map)
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pairs() -> Vec<(String, String)> {
        vec![
            ("Superhero".to_string(), "HERO".to_string()),
            ("Test".to_string(), "DOOTEST".to_string()),
            ("Real Life".to_string(), "LIFE".to_string()),
        ]
    }

    #[test]
    fn test_resolve_known_location() {
        let map = LocationPrefixMap::new(default_pairs()).unwrap();
        assert_eq!(map.resolve("Superhero").unwrap(), "HERO");
        assert_eq!(map.resolve("Real Life").unwrap(), "LIFE");
    }

    #[test]
    fn test_resolve_unknown_location_rejected() {
        let map = LocationPrefixMap::new(default_pairs()).unwrap();
        let err = map.resolve("Atlantis").unwrap_err();
        assert!(matches!(err, IntakeError::InvalidLocation(loc) if loc == "Atlantis"));
    }

    #[test]
    fn test_prefixes_uppercased() {
        let map =
            LocationPrefixMap::new(vec![("Ward".to_string(), "wd".to_string())]).unwrap();
        assert_eq!(map.resolve("Ward").unwrap(), "WD");
    }

    #[test]
    fn test_empty_map_rejected() {
        assert!(LocationPrefixMap::new(Vec::new()).is_err());
    }

    #[test]
    fn test_non_alphabetic_prefix_rejected() {
        let result = LocationPrefixMap::new(vec![("Ward".to_string(), "W1".to_string())]);
        assert!(matches!(result, Err(IntakeError::Configuration(_))));
    }

    #[test]
    fn test_overlapping_prefixes_rejected() {
        let result = LocationPrefixMap::new(vec![
            ("A".to_string(), "HERO".to_string()),
            ("B".to_string(), "HEROX".to_string()),
        ]);
        assert!(matches!(result, Err(IntakeError::Configuration(_))));
    }

    #[test]
    fn test_locations_sorted() {
        let map = LocationPrefixMap::new(default_pairs()).unwrap();
        let names: Vec<&str> = map.locations().collect();
        assert_eq!(names, ["Real Life", "Superhero", "Test"]);
        assert_eq!(map.len(), 3);
    }
}
