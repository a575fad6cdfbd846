//! Biography line parsing.
//!
//! A biography line combines birth and death information in one string,
//! e.g. `"Amsterdam 1640 – Utrecht (?) na 1700"`. The divider between the
//! two halves is an en-dash, but the corpus also uses a plain hyphen; both
//! are accepted. Each half is `<place> <year>` with optional qualifiers,
//! or a bare year, or an unknown marker.

use tracing::warn;

/// Qualifier tokens dropped from place fragments.
///
/// `ca.` marks an approximate year, `na` an "after" bound, `(?)` an
/// uncertain reading. They qualify the year, not the place, so they never
/// belong in a place name.
pub const PLACE_QUALIFIERS: &[&str] = &["ca.", "na", "(?)"];

/// Place marker for an unknown location.
const UNKNOWN_PLACE: &str = "onbekend";

/// Structured birth and death fields parsed from a biography line.
///
/// Years are kept as the literal digit strings from the source; they feed
/// year-typed literals in the output graph, not date arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BioFields {
    /// Birth place display name, if present and known.
    pub birth_place: Option<String>,
    /// Birth year digits.
    pub birth_year: Option<String>,
    /// Death place display name, if present and known.
    pub death_place: Option<String>,
    /// Death year digits.
    pub death_year: Option<String>,
}

impl BioFields {
    /// Returns true when no field was recovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.birth_place.is_none()
            && self.birth_year.is_none()
            && self.death_place.is_none()
            && self.death_year.is_none()
    }
}

/// Splits a biography line into birth and death halves and parses each
/// half independently.
///
/// A line without exactly one divider yields the empty result and a
/// warning, never an error.
///
/// # Examples
///
/// ```
/// use portretgraaf::parse_bio;
///
/// let fields = parse_bio("Amsterdam 1640 – Utrecht 1700");
/// assert_eq!(fields.birth_place.as_deref(), Some("Amsterdam"));
/// assert_eq!(fields.death_year.as_deref(), Some("1700"));
/// ```
#[must_use]
pub fn parse_bio(bio: &str) -> BioFields {
    // Rewriting '-' to ' –' makes a spaced hyphen divide like the en-dash
    // while leaving intra-word hyphens alone (they end up without the
    // trailing space the divider requires).
    let normalized = bio.replace('-', " –");
    let mut halves = normalized.split(" – ");
    let (Some(birth), Some(death), None) = (halves.next(), halves.next(), halves.next()) else {
        warn!(bio, "biography line has no birth/death divider");
        return BioFields::default();
    };

    let (birth_place, birth_year) = parse_half(birth.trim());
    let (death_place, death_year) = parse_half(death.trim());
    BioFields {
        birth_place,
        birth_year,
        death_place,
        death_year,
    }
}

/// Parses one half of the line into (place, year).
fn parse_half(half: &str) -> (Option<String>, Option<String>) {
    if half.is_empty() {
        return (None, None);
    }
    if is_year(half) {
        return (None, Some(half.to_string()));
    }
    let Some((place_fragment, year_fragment)) = half.rsplit_once(' ') else {
        // Single token that is not a year: "onbekend" and friends.
        return (None, None);
    };

    let year = year_fragment.trim();
    let year = is_year(year).then(|| year.to_string());
    (clean_place(place_fragment), year)
}

/// Drops qualifier tokens and unknown markers from a place fragment.
fn clean_place(fragment: &str) -> Option<String> {
    let cleaned = fragment
        .split_whitespace()
        .filter(|token| !PLACE_QUALIFIERS.contains(token))
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() || cleaned.to_lowercase() == UNKNOWN_PLACE {
        None
    } else {
        Some(cleaned)
    }
}

fn is_year(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
