//! Person identity resolution.
//!
//! The identity layer is the prerequisite for everything in portretgraaf.
//! Repeated references to the same real-world person (as page subject,
//! article author, or painter) must resolve to one stable identifier
//! across runs, otherwise the output graph fractures into duplicates.
//!
//! Resolution is backed by an append-only [`IdentityMap`] that is loaded
//! at the start of a run and persisted at the end (see [`store`]).

pub mod store;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::name::CanonicalKey;

/// Identifier for a person entity.
///
/// Stable identifiers are URIs minted deterministically from the person's
/// canonical key, so the same name always maps to the same identifier,
/// even across loss of the identity map, as long as the namespace is
/// unchanged. Anonymous identifiers are fresh blank nodes minted for
/// subjects whose name is explicitly unknown; they are never stored and
/// never reused.
///
/// # Examples
///
/// ```
/// use portretgraaf::PersonId;
///
/// let id = PersonId::stable("https://example.org/person/arnoud-van-halen");
/// assert!(!id.is_anonymous());
///
/// let anon = PersonId::anonymous();
/// assert!(anon.is_anonymous());
/// assert_ne!(anon, PersonId::anonymous());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersonId {
    /// Durable URI shared by every mention of the same canonical name.
    Stable {
        /// The minted URI.
        uri: String,
    },

    /// One-off blank node for an explicitly unknown subject.
    Anonymous {
        /// Blank-node discriminator.
        node: Uuid,
    },
}

impl PersonId {
    /// Creates a stable identifier from a URI.
    #[must_use]
    pub fn stable(uri: impl Into<String>) -> Self {
        Self::Stable { uri: uri.into() }
    }

    /// Mints a fresh anonymous identifier.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::Anonymous {
            node: Uuid::new_v4(),
        }
    }

    /// Returns true for anonymous identifiers.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous { .. })
    }

    /// Returns the URI of a stable identifier.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Stable { uri } => Some(uri),
            Self::Anonymous { .. } => None,
        }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { uri } => write!(f, "{uri}"),
            Self::Anonymous { node } => write!(f, "_:p{}", node.simple()),
        }
    }
}

/// Append-only mapping from canonical keys to stable identifiers.
///
/// Invariant: once a key is present its identifier never changes across
/// runs (unless the backing file is deleted). Inserts of an existing key
/// are ignored; there is no removal.
///
/// Serializes as a flat JSON object, which is also the on-disk format of
/// the [`store::IdentityStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityMap {
    entries: BTreeMap<CanonicalKey, String>,
}

impl IdentityMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the identifier stored for a key.
    #[must_use]
    pub fn get(&self, key: &CanonicalKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a key that is not yet present.
    ///
    /// Returns false (and leaves the stored identifier untouched) when the
    /// key already exists; entries are never overwritten.
    pub fn insert_new(&mut self, key: CanonicalKey, uri: impl Into<String>) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, uri.into());
        true
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

/// Resolves display names to persistent person identifiers.
///
/// The resolver owns the [`IdentityMap`] for the duration of a run; no
/// other component mutates it. Resolution is strictly ordered: the first
/// caller to mention a canonical name decides its identifier, and every
/// later mention, in the same run or any later one, gets the same
/// identifier back.
#[derive(Debug)]
pub struct IdentityResolver {
    namespace: String,
    map: IdentityMap,
}

impl IdentityResolver {
    /// Creates a resolver minting URIs under the given namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>, map: IdentityMap) -> Self {
        Self {
            namespace: namespace.into(),
            map,
        }
    }

    /// Resolves a display name to a person identifier.
    ///
    /// A name normalizing to the unknown marker (or to nothing at all)
    /// gets a fresh anonymous identifier and leaves the map untouched.
    /// A known key returns its stored identifier unchanged. A new key is
    /// minted deterministically from the key and inserted.
    pub fn resolve(&mut self, display_name: &str) -> PersonId {
        let key = CanonicalKey::from_display(display_name);
        if key.is_unknown() || key.is_empty() {
            return PersonId::anonymous();
        }
        if let Some(uri) = self.map.get(&key) {
            return PersonId::stable(uri);
        }
        let uri = format!("{}{}", self.namespace, key);
        self.map.insert_new(key, uri.clone());
        PersonId::stable(uri)
    }

    /// Read access to the underlying map.
    #[must_use]
    pub fn map(&self) -> &IdentityMap {
        &self.map
    }

    /// Consumes the resolver, returning the map for persistence.
    #[must_use]
    pub fn into_map(self) -> IdentityMap {
        self.map
    }
}
