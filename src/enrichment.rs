//! Artist same-as enrichment.
//!
//! A hand-curated sidecar file maps stable person URIs to entries in an
//! external catalog. When a painter resolves to a URI in this mapping,
//! the external URI is attached to the painter's same-as links. The
//! sidecar is optional: without it the graph is simply less linked.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Mapping from stable person URIs to external catalog URIs.
///
/// Values may be null in the sidecar file (an artist looked up but not
/// found in the catalog); null entries are kept so the curation state
/// round-trips, but they never produce a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistLinks {
    links: BTreeMap<String, Option<String>>,
}

impl ArtistLinks {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the external URI for a stable person URI.
    #[must_use]
    pub fn lookup(&self, uri: &str) -> Option<&str> {
        self.links.get(uri).and_then(Option::as_deref)
    }

    /// Records a link.
    pub fn insert(&mut self, uri: impl Into<String>, external: impl Into<String>) {
        self.links.insert(uri.into(), Some(external.into()));
    }

    /// Loads the sidecar file; a missing or malformed file yields the
    /// empty mapping.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                debug!(
                    path = %path.display(),
                    error = %err,
                    "artist links sidecar not readable, continuing without enrichment"
                );
                return Self::new();
            }
        };
        match serde_json::from_str(&json) {
            Ok(links) => links,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "artist links sidecar malformed, continuing without enrichment"
                );
                Self::new()
            }
        }
    }

    /// Number of entries, including null ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
