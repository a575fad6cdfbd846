//! Canonical name keys.
//!
//! Identity resolution keys off a normalized form of a person's display
//! name: two spellings collide to one identity exactly when they
//! normalize identically. The normalization is the only place where name
//! strings are interpreted; everything downstream works with keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalized form of a display name, usable as a URI path segment.
///
/// Produced by [`CanonicalKey::from_display`]: the name is lowercased,
/// spaces become hyphens, diacritics are folded onto their base letters,
/// and everything outside `[a-z-]` is dropped.
///
/// Normalization is total (any input yields a key, possibly empty) and
/// idempotent (normalizing an already-normalized key returns it
/// unchanged).
///
/// # Examples
///
/// ```
/// use portretgraaf::CanonicalKey;
///
/// let key = CanonicalKey::from_display("Arnoud van Halen");
/// assert_eq!(key.as_str(), "arnoud-van-halen");
///
/// let accented = CanonicalKey::from_display("José de Acosta");
/// assert_eq!(accented.as_str(), "jose-de-acosta");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// The key reserved for explicitly unknown subjects.
    pub const UNKNOWN: &'static str = "onbekend";

    /// Normalizes a display name into a canonical key.
    #[must_use]
    pub fn from_display(name: &str) -> Self {
        let lowered = name.to_lowercase().replace(' ', "-");
        let folded: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
        let key = folded
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == '-')
            .collect();
        Self(key)
    }

    /// Wraps a string that is already in canonical form.
    ///
    /// Intended for deserialization paths and tests; no validation is
    /// performed.
    #[must_use]
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key is the reserved unknown marker.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// Returns true if nothing survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        let key = CanonicalKey::from_display("Jan Maurits Quinkhard");
        assert_eq!(key.as_str(), "jan-maurits-quinkhard");
    }

    #[test]
    fn test_normalize_diacritics() {
        assert_eq!(
            CanonicalKey::from_display("Révérend père").as_str(),
            "reverend-pere"
        );
        assert_eq!(CanonicalKey::from_display("Zoë").as_str(), "zoe");
    }

    #[test]
    fn test_normalize_drops_non_letters() {
        assert_eq!(
            CanonicalKey::from_display("Andries Pels Jr. (1655)").as_str(),
            "andries-pels-jr-"
        );
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "Arnoud van Halen",
            "Révérend",
            "onbekend",
            "",
            "ALL CAPS NAME",
            "met–streepje",
        ];
        for input in inputs {
            let once = CanonicalKey::from_display(input);
            let twice = CanonicalKey::from_display(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_normalize_total() {
        assert_eq!(CanonicalKey::from_display("").as_str(), "");
        assert_eq!(CanonicalKey::from_display("1234 ??").as_str(), "-");
        assert!(CanonicalKey::from_display("???").is_empty());
    }

    #[test]
    fn test_unknown_marker() {
        assert!(CanonicalKey::from_display("Onbekend").is_unknown());
        assert!(CanonicalKey::from_display("onbekend").is_unknown());
        assert!(!CanonicalKey::from_display("bekend").is_unknown());
    }

    #[test]
    fn test_collision_iff_identical_normalization() {
        let a = CanonicalKey::from_display("Arnoud van Halen");
        let b = CanonicalKey::from_display("ARNOUD VAN HALEN");
        let c = CanonicalKey::from_display("Arnoud van Haelen");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_transparent() {
        let key = CanonicalKey::from_display("Arnoud van Halen");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"arnoud-van-halen\"");
        let back: CanonicalKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
