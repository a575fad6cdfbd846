//! Pipeline configuration.

use crate::error::{PipelineError, PipelineResult};

/// Namespaces and catalog prefixes used when minting identifiers.
///
/// Stable person and artwork URIs are `<namespace><canonical-key>`;
/// changing a namespace therefore re-mints every identifier, which is why
/// the defaults are the production namespaces and tests that care about
/// URIs pass their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Namespace prefix for stable person URIs.
    pub person_namespace: String,
    /// Namespace prefix for artwork URIs.
    pub artwork_namespace: String,
    /// Catalog prefix for external biographical-profile same-as links.
    pub profile_catalog_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            person_namespace:
                "https://data.create.humanities.uva.nl/id/schrijverskabinet/person/".to_string(),
            artwork_namespace:
                "https://data.create.humanities.uva.nl/id/schrijverskabinet/artwork/".to_string(),
            profile_catalog_prefix: "http://data.bibliotheken.nl/id/dbnla/".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Checks that every namespace is non-empty.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending field. An empty
    /// namespace would mint bare canonical keys as identifiers and
    /// silently collide with any other empty-namespace dataset.
    pub fn validate(self) -> PipelineResult<Self> {
        if self.person_namespace.is_empty() {
            return Err(PipelineError::config("person namespace is empty"));
        }
        if self.artwork_namespace.is_empty() {
            return Err(PipelineError::config("artwork namespace is empty"));
        }
        if self.profile_catalog_prefix.is_empty() {
            return Err(PipelineError::config("profile catalog prefix is empty"));
        }
        Ok(self)
    }
}
