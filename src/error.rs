//! Error types for portretgraaf.
//!
//! All errors are strongly typed using thiserror. Recoverable per-record
//! parse failures are deliberately not represented here: the parsers
//! degrade to empty results and the assembler records a
//! [`Diagnostic`](crate::assembler::Diagnostic) instead. These types cover
//! the failures that must stop a run or be surfaced to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while persisting the identity map.
///
/// A failed save is fatal: the resolved mapping must never be silently
/// lost. A failed *load* is not an error at all: the store degrades to an
/// empty map (see [`IdentityStore::load`](crate::identity::store::IdentityStore::load)).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The map could not be serialized to JSON.
    #[error("failed to serialize identity map: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The temporary map file could not be written.
    #[error("failed to write identity map {path}: {source}")]
    Write {
        /// Path of the temporary file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The freshly written map could not be moved into place.
    #[error("failed to replace identity map {path}: {source}")]
    Replace {
        /// Path of the map file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while loading the input corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("failed to read corpus {path}: {source}")]
    Read {
        /// Path of the corpus file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The corpus file is not valid JSON in the fetcher's shape.
    #[error("failed to parse corpus {path}: {source}")]
    Parse {
        /// Path of the corpus file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Identity-map persistence failed.
    #[error("identity store error: {0}")]
    Store(#[from] StoreError),

    /// The input corpus could not be loaded.
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// The graph sink rejected an entity.
    #[error("graph sink error: {message}")]
    Sink {
        /// Description from the sink.
        message: String,
    },

    /// The pipeline configuration is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// What is wrong with the configuration.
        message: String,
    },
}

impl PipelineError {
    /// Creates a sink error.
    #[must_use]
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this is an identity-store error.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns true if this is a corpus-loading error.
    #[must_use]
    pub const fn is_corpus(&self) -> bool {
        matches!(self, Self::Corpus(_))
    }

    /// Returns true if this is a sink error.
    #[must_use]
    pub const fn is_sink(&self) -> bool {
        matches!(self, Self::Sink { .. })
    }
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
