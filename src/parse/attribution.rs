//! Painter attribution splitting.
//!
//! The painter field names one or several painters with idiosyncratic
//! Dutch phrasing: "X en Y" means both painted; "X, verbeterd door Y"
//! means Y corrected X's work and both are kept; "X, vervangen door Y"
//! means Y's work replaced X's and only Y is kept; "X of Y" marks
//! uncertainty and both are kept as alternatives. A trailing
//! parenthetical carries commentary about the attribution's confidence
//! and is stripped.

/// Literal corrections for known-bad attribution strings.
///
/// Two source pages carry prose where the other pages carry names. These
/// are documented corpus anomalies, matched exactly after the trailing
/// parenthetical is stripped; not a general rewriting rule.
pub const ATTRIBUTION_CORRECTIONS: &[(&str, &str)] = &[
    (
        "Tweemaal door Arnoud van Halen en ('in zijnen laatsten leeftijd' door) Jan Maurits Quinkhard",
        "Arnoud van Halen en Jan Maurits Quinkhard",
    ),
    (
        "Tweemaal door Jan Maurits Quinkhard",
        "Jan Maurits Quinkhard",
    ),
];

/// "corrected by": both attributions are kept, in order.
const CORRECTED_BY: &str = ", verbeterd door ";

/// "replaced by": only the replacement attribution is kept.
const REPLACED_BY: &str = ", vervangen door ";

/// "and": multiple attributions.
const CONJUNCTION: &str = " en ";

/// "or": uncertainty between candidates; both are kept as alternatives.
const ALTERNATIVE: &str = " of ";

/// Splits a painter attribution string into individual painter names.
///
/// The first matching rule wins; the resulting names are trimmed and
/// empty fragments are dropped. Ambiguity ("X of Y") is preserved: both
/// candidates come back and end up in the graph as alternatives.
///
/// # Examples
///
/// ```
/// use portretgraaf::split_attributions;
///
/// let names = split_attributions("Jan de Vries en Piet Bakker");
/// assert_eq!(names, vec!["Jan de Vries", "Piet Bakker"]);
///
/// let names = split_attributions("Jan de Vries (onzeker)");
/// assert_eq!(names, vec!["Jan de Vries"]);
/// ```
#[must_use]
pub fn split_attributions(painter: &str) -> Vec<String> {
    let mut name = painter.trim();

    if name.ends_with(')') {
        if let Some((head, _qualifier)) = name.rsplit_once(" (") {
            name = head;
        }
    }

    for (anomaly, correction) in ATTRIBUTION_CORRECTIONS {
        if name == *anomaly {
            name = correction;
            break;
        }
    }

    let parts: Vec<&str> = if name.contains(CORRECTED_BY) {
        name.split(CORRECTED_BY).collect()
    } else if let Some((_original, replacement)) = name.split_once(REPLACED_BY) {
        vec![replacement]
    } else if name.contains(CONJUNCTION) {
        name.split(CONJUNCTION).collect()
    } else if name.contains(ALTERNATIVE) {
        name.split(ALTERNATIVE).collect()
    } else {
        vec![name]
    };

    parts
        .into_iter()
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_painter() {
        assert_eq!(
            split_attributions("Arnoud van Halen"),
            vec!["Arnoud van Halen"]
        );
    }

    #[test]
    fn test_conjunction_splits() {
        assert_eq!(
            split_attributions("Jan de Vries en Piet Bakker"),
            vec!["Jan de Vries", "Piet Bakker"]
        );
    }

    #[test]
    fn test_corrected_by_keeps_both_in_order() {
        assert_eq!(
            split_attributions("Jan de Vries, verbeterd door Piet Bakker"),
            vec!["Jan de Vries", "Piet Bakker"]
        );
    }

    #[test]
    fn test_replaced_by_keeps_replacement_only() {
        assert_eq!(
            split_attributions("Jan de Vries, vervangen door Piet Bakker"),
            vec!["Piet Bakker"]
        );
    }

    #[test]
    fn test_alternative_keeps_both() {
        assert_eq!(
            split_attributions("Jan de Vries of Piet Bakker"),
            vec!["Jan de Vries", "Piet Bakker"]
        );
    }

    #[test]
    fn test_trailing_parenthetical_stripped() {
        assert_eq!(
            split_attributions("Jan de Vries (onzeker)"),
            vec!["Jan de Vries"]
        );
        assert_eq!(
            split_attributions("Jan de Vries en Piet Bakker (toeschrijving)"),
            vec!["Jan de Vries", "Piet Bakker"]
        );
    }

    #[test]
    fn test_correction_table_applied() {
        assert_eq!(
            split_attributions("Tweemaal door Jan Maurits Quinkhard"),
            vec!["Jan Maurits Quinkhard"]
        );
        assert_eq!(
            split_attributions(
                "Tweemaal door Arnoud van Halen en ('in zijnen laatsten leeftijd' door) \
                 Jan Maurits Quinkhard"
            ),
            vec!["Arnoud van Halen", "Jan Maurits Quinkhard"]
        );
    }

    #[test]
    fn test_corrected_by_wins_over_conjunction() {
        // Rule order matters: "verbeterd door" splits before " en " gets
        // a chance to split the right-hand side differently.
        assert_eq!(
            split_attributions("A en B, verbeterd door C"),
            vec!["A en B", "C"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(split_attributions("").is_empty());
        assert!(split_attributions("   ").is_empty());
    }
}
