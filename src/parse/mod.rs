//! Free-text field parsers.
//!
//! Each parser turns one idiosyncratic display field from the source
//! corpus into a structured result. They are total: malformed input
//! degrades to an empty result (plus a logged diagnostic), never an
//! error, so a single bad record can never abort a run.

pub mod attribution;
pub mod bio;
pub mod dating;

pub use attribution::split_attributions;
pub use bio::{parse_bio, BioFields};
pub use dating::{parse_date_range, PublicationWindow};
