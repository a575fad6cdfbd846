//! Input records from the portrait scraper.
//!
//! The fetcher (outside this crate) turns each source page into one
//! fixed-shape JSON object. These types mirror that contract; every field
//! is carried verbatim and only interpreted downstream by the parsers and
//! the assembler.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// A named link as scraped from a detail field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    /// Display text, when the field was filled.
    #[serde(default)]
    pub name: Option<String>,
    /// Target URL, when the field linked out.
    #[serde(default)]
    pub url: Option<String>,
}

impl LinkRef {
    /// Creates a link with both parts present.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }
}

/// One scraped portrait page, the unit of input to the assembler.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortraitRecord {
    /// Sitter display name (the page heading).
    pub title: String,
    /// Disambiguating sub-heading.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Combined birth/death line.
    #[serde(default)]
    pub bio: Option<String>,
    /// Painter attribution text.
    #[serde(default)]
    pub painter: Option<String>,
    /// Display dating of the artwork.
    #[serde(default)]
    pub date: Option<String>,
    /// Holding collection: display name plus optional catalog URL.
    #[serde(default)]
    pub origin: LinkRef,
    /// Scholarly article about the portrait.
    #[serde(default)]
    pub article: LinkRef,
    /// External biographical profile of the sitter.
    #[serde(default)]
    pub dbnl: LinkRef,
    /// Representative quote shown on the page.
    #[serde(default)]
    pub quote: Option<String>,
    /// Image of the sitter.
    #[serde(default)]
    pub depiction: Option<String>,
    /// Image of the artwork itself.
    #[serde(default)]
    pub artdepiction: Option<String>,
}

/// Scrape-run metadata carried alongside the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMetadata {
    /// Timestamp of the scrape run, as written by the fetcher.
    #[serde(default)]
    pub date: Option<String>,
}

/// The full scraped corpus: portrait records keyed by page URL.
///
/// Insertion order is load-bearing: records are processed in this order
/// and the first record to mention a name decides its identifier. The
/// collection is therefore an [`IndexMap`], not a hash map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// Portrait records keyed by canonical page URL, in scrape order.
    #[serde(alias = "portrets")]
    pub portraits: IndexMap<String, PortraitRecord>,
    /// Scrape metadata.
    #[serde(default)]
    pub metadata: CorpusMetadata,
}

impl Corpus {
    /// Parses a corpus from the fetcher's JSON dump.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error when the JSON does not
    /// match the input contract.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a corpus from a JSON file.
    ///
    /// # Errors
    ///
    /// Unlike the identity map, a missing or malformed corpus is fatal:
    /// there is nothing to run without input.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.portraits.len()
    }

    /// Returns true when the corpus holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portraits.is_empty()
    }
}
