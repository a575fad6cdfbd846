//! # portretgraaf
//!
//! Converts scraped portrait records from a single cultural-heritage
//! collection into a linked-data graph of people, places, artworks, and
//! publication events, while guaranteeing that repeated references to the
//! same real-world person resolve to one stable identifier across runs.
//!
//! ## Core Concepts
//!
//! - **CanonicalKey**: normalized form of a display name; the
//!   identity-resolution key
//! - **IdentityResolver**: canonical key → persistent identifier, backed
//!   by a durable, append-only map
//! - **GraphAssembler**: one portrait record in, typed graph entities out
//! - **GraphSink**: the seam to the external graph writer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portretgraaf::{Corpus, IdentityStore, MemorySink, Pipeline, PipelineConfig};
//!
//! let corpus = Corpus::load("data/data.json")?;
//! let store = IdentityStore::new("data/persondata.json");
//! let pipeline = Pipeline::new(PipelineConfig::default(), store)?;
//!
//! let mut sink = MemorySink::new();
//! let report = pipeline.run(&corpus, &mut sink)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod config;
pub mod error;
pub mod graph;
pub mod identity;
pub mod name;
pub mod record;

// Parsing and assembly
pub mod assembler;
pub mod enrichment;
pub mod parse;
pub mod pipeline;

// Re-export primary types at crate root for convenience
pub use assembler::{AssemblyReport, Diagnostic, GraphAssembler};
pub use config::PipelineConfig;
pub use enrichment::ArtistLinks;
pub use error::{CorpusError, PipelineError, PipelineResult, StoreError};
pub use graph::sink::{GraphSink, MemorySink};
pub use graph::{Article, Artwork, GraphEntity, Label, Person, Place, PortraitPage, VitalEvent};
pub use identity::store::IdentityStore;
pub use identity::{IdentityMap, IdentityResolver, PersonId};
pub use name::CanonicalKey;
pub use parse::{parse_bio, parse_date_range, split_attributions, BioFields, PublicationWindow};
pub use pipeline::Pipeline;
pub use record::{Corpus, CorpusMetadata, LinkRef, PortraitRecord};
