//! Run orchestration.
//!
//! One run: load the identity map, assemble every record strictly in
//! corpus order, persist the updated map. There is no checkpoint in the
//! middle (the map is written exactly once, after the full collection has
//! been processed) and no parallelism: ordered resolution is what makes
//! the first mention of a name win its identifier.

use tracing::info;

use crate::assembler::{AssemblyReport, GraphAssembler};
use crate::config::PipelineConfig;
use crate::enrichment::ArtistLinks;
use crate::error::PipelineResult;
use crate::graph::sink::GraphSink;
use crate::identity::store::IdentityStore;
use crate::identity::IdentityResolver;
use crate::record::Corpus;

/// End-to-end pipeline over a scraped corpus.
///
/// # Examples
///
/// ```rust,ignore
/// use portretgraaf::{Corpus, IdentityStore, MemorySink, Pipeline, PipelineConfig};
///
/// let corpus = Corpus::load("data/data.json")?;
/// let store = IdentityStore::new("data/persondata.json");
/// let pipeline = Pipeline::new(PipelineConfig::default(), store)?;
///
/// let mut sink = MemorySink::new();
/// let report = pipeline.run(&corpus, &mut sink)?;
/// println!("{} records, {} diagnostics", report.records, report.diagnostics.len());
/// ```
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    store: IdentityStore,
    links: ArtistLinks,
}

impl Pipeline {
    /// Creates a pipeline with the given configuration and identity-map
    /// store.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a namespace is empty.
    pub fn new(config: PipelineConfig, store: IdentityStore) -> PipelineResult<Self> {
        Ok(Self {
            config: config.validate()?,
            store,
            links: ArtistLinks::new(),
        })
    }

    /// Adds artist same-as enrichment.
    #[must_use]
    pub fn with_artist_links(mut self, links: ArtistLinks) -> Self {
        self.links = links;
        self
    }

    /// Runs the pipeline over a corpus, emitting entities into the sink.
    ///
    /// The identity map is loaded once up front (missing or corrupt files
    /// degrade to an empty map) and saved once at the end; a failed save
    /// aborts with an error so the resolved mapping is never silently
    /// lost.
    ///
    /// # Errors
    ///
    /// Sink failures and a failed identity-map save.
    pub fn run<S: GraphSink>(&self, corpus: &Corpus, sink: &mut S) -> PipelineResult<AssemblyReport> {
        let map = self.store.load();
        let known_before = map.len();

        let mut resolver = IdentityResolver::new(self.config.person_namespace.clone(), map);
        let assembler = GraphAssembler::new(&mut resolver, sink, &self.config, &self.links);
        let report = assembler.assemble(corpus)?;

        self.store.save(resolver.map())?;
        info!(
            records = report.records,
            artworks = report.artworks,
            articles = report.articles,
            new_identities = resolver.map().len() - known_before,
            diagnostics = report.diagnostics.len(),
            "pipeline run complete"
        );
        Ok(report)
    }
}
