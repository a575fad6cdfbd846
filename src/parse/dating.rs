//! Artwork dating.
//!
//! The display date of an artwork is free text: a bare year, an en-dash
//! range, or a two-clause form where the second clause records a later
//! modification of the work. Only the creation window is modeled; the
//! modification clause is parsed past and discarded by contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Conjunction separating a creation clause from a modification clause.
const CLAUSE_CONJUNCTION: &str = " en ";

/// Divider inside a year range.
const RANGE_DIVIDER: &str = " – ";

/// Calendar window in which an artwork was published.
///
/// Year precision only: the window always runs from January 1 of the
/// earliest year through December 31 of the latest. An artwork carries at
/// most one window.
///
/// # Examples
///
/// ```
/// use portretgraaf::parse_date_range;
///
/// let window = parse_date_range("1640").unwrap();
/// assert_eq!(window.earliest.to_string(), "1640-01-01");
/// assert_eq!(window.latest.to_string(), "1640-12-31");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationWindow {
    /// Earliest possible begin date.
    pub earliest: NaiveDate,
    /// Latest possible end date.
    pub latest: NaiveDate,
}

impl PublicationWindow {
    /// Builds the window spanning a begin/end year pair.
    ///
    /// Returns None when the years do not form valid calendar dates.
    #[must_use]
    pub fn from_years(begin: i32, end: i32) -> Option<Self> {
        let earliest = NaiveDate::from_ymd_opt(begin, 1, 1)?;
        let latest = NaiveDate::from_ymd_opt(end, 12, 31)?;
        Some(Self { earliest, latest })
    }

    /// Builds the window for a single year.
    #[must_use]
    pub fn from_year(year: i32) -> Option<Self> {
        Self::from_years(year, year)
    }
}

/// Parses a display date into at most one publication window.
///
/// Rules, first match wins:
///
/// 1. a pure year becomes a single-year window;
/// 2. a conjunction (`" en "`) keeps only the first clause (the second
///    describes a later modification and is discarded) and re-runs the
///    year/range rules on that clause after dropping its parenthetical
///    decoration;
/// 3. an en-dash range becomes a begin/end window;
/// 4. anything else yields no window, which is not an error.
#[must_use]
pub fn parse_date_range(date: &str) -> Option<PublicationWindow> {
    let date = date.trim();
    if let Some(year) = parse_year(date) {
        return PublicationWindow::from_year(year);
    }
    if let Some((creation, _modification)) = date.split_once(CLAUSE_CONJUNCTION) {
        return parse_clause(&clean_clause(creation));
    }
    parse_range(date)
}

/// Year-or-range rules applied to a single cleaned clause.
fn parse_clause(clause: &str) -> Option<PublicationWindow> {
    if let Some(year) = parse_year(clause) {
        return PublicationWindow::from_year(year);
    }
    parse_range(clause)
}

fn parse_range(s: &str) -> Option<PublicationWindow> {
    let (begin, end) = s.split_once(RANGE_DIVIDER)?;
    let begin = parse_year(begin.trim())?;
    let end = parse_year(end.trim())?;
    let window = PublicationWindow::from_years(begin, end);
    if window.is_none() {
        warn!(date = s, "year range does not form a valid calendar window");
    }
    window
}

fn parse_year(s: &str) -> Option<i32> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Removes parenthetical decoration from a clause.
///
/// A clause wholly wrapped in parentheses is unwrapped; otherwise any
/// embedded parenthetical qualifier is dropped.
fn clean_clause(clause: &str) -> String {
    let clause = clause.trim();
    if let Some(inner) = clause
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return inner.trim().to_string();
    }

    let mut depth = 0usize;
    let mut out = String::with_capacity(clause.len());
    for c in clause.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
