//! Durable storage for the identity map.
//!
//! The map is one flat JSON object on disk. It is loaded once at the
//! start of a run and replaced wholesale at the end; replacement goes
//! through a sibling temp file and a rename, so a failed save never
//! truncates the existing map.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::IdentityMap;
use crate::error::StoreError;

/// Loads and saves the canonical-key → identifier mapping.
///
/// # Examples
///
/// ```rust,ignore
/// use portretgraaf::{IdentityStore, IdentityMap};
///
/// let store = IdentityStore::new("data/persondata.json");
/// let map = store.load();
/// // ... resolve names against the map ...
/// store.save(&map)?;
/// ```
#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the map, degrading to an empty map when the file is missing
    /// or unreadable.
    ///
    /// Stable identifiers are a pure function of key and namespace, so a
    /// lost map re-mints the same URIs; only identifiers from a foreign
    /// naming scheme would drift.
    #[must_use]
    pub fn load(&self) -> IdentityMap {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(
                    path = %self.path.display(),
                    error = %err,
                    "identity map not readable, starting empty"
                );
                return IdentityMap::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(map) => map,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "identity map corrupt, starting empty"
                );
                IdentityMap::new()
            }
        }
    }

    /// Saves the map, replacing the previous file atomically.
    ///
    /// # Errors
    ///
    /// Any serialization or I/O failure is surfaced: a resolved mapping
    /// must never be silently lost.
    pub fn save(&self, map: &IdentityMap) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(map).map_err(StoreError::Serialize)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Replace {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::CanonicalKey;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(dir.path().join("persons.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("persons.json");
        fs::write(&path, b"{not json").unwrap();
        let store = IdentityStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(dir.path().join("persons.json"));

        let mut map = IdentityMap::new();
        map.insert_new(CanonicalKey::from_display("Arnoud van Halen"), "u1");
        map.insert_new(CanonicalKey::from_display("Jan de Baen"), "u2");
        store.save(&map).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded, map);
        assert_eq!(
            reloaded.get(&CanonicalKey::from_display("Jan de Baen")),
            Some("u2")
        );
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(dir.path().join("persons.json"));

        let mut first = IdentityMap::new();
        first.insert_new(CanonicalKey::from_raw("a"), "u1");
        store.save(&first).unwrap();

        let mut second = IdentityMap::new();
        second.insert_new(CanonicalKey::from_raw("b"), "u2");
        store.save(&second).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded, second);
        assert!(reloaded.get(&CanonicalKey::from_raw("a")).is_none());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(dir.path().join("no-such-dir").join("persons.json"));
        let err = store.save(&IdentityMap::new()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("persons.json");
        let store = IdentityStore::new(&path);
        store.save(&IdentityMap::new()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
