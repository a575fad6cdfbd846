//! Output seam to the external graph writer.
//!
//! The serialization format, vocabulary bindings, and destination
//! document all live behind [`GraphSink`]; this crate only guarantees
//! that entities arrive fully populated, in record-iteration order.

use super::{Article, Artwork, GraphEntity, Person, PortraitPage};
use crate::error::PipelineResult;

/// Receives assembled entities in record-iteration order.
pub trait GraphSink {
    /// Accepts one finished entity.
    ///
    /// # Errors
    ///
    /// A sink error aborts the run; per-record parse problems never reach
    /// this trait.
    fn emit(&mut self, entity: GraphEntity) -> PipelineResult<()>;
}

/// In-memory sink collecting every emitted entity.
///
/// Reference implementation for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemorySink {
    entities: Vec<GraphEntity>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities, in emission order.
    #[must_use]
    pub fn entities(&self) -> &[GraphEntity] {
        &self.entities
    }

    /// The emitted persons, in order.
    #[must_use]
    pub fn persons(&self) -> Vec<&Person> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                GraphEntity::Person(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// The emitted artworks, in order.
    #[must_use]
    pub fn artworks(&self) -> Vec<&Artwork> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                GraphEntity::Artwork(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    /// The emitted articles, in order.
    #[must_use]
    pub fn articles(&self) -> Vec<&Article> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                GraphEntity::Article(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    /// The emitted page wrappers, in order.
    #[must_use]
    pub fn pages(&self) -> Vec<&PortraitPage> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                GraphEntity::Page(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Number of emitted entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true when nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl GraphSink for MemorySink {
    fn emit(&mut self, entity: GraphEntity) -> PipelineResult<()> {
        self.entities.push(entity);
        Ok(())
    }
}
