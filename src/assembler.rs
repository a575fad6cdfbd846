//! Record-to-graph assembly.
//!
//! The assembler is the only component that constructs entities. It walks
//! the record collection strictly in order, pulls structured fields out of
//! the free-text parsers, resolves every named person through the
//! [`IdentityResolver`], and emits finished entities into the
//! [`GraphSink`].
//!
//! Failure policy: no field problem in a single record may abort the run.
//! Every malformed field degrades to an omitted sub-entity plus a
//! [`Diagnostic`] identifying the offending record.

use tracing::warn;

use crate::config::PipelineConfig;
use crate::enrichment::ArtistLinks;
use crate::error::PipelineResult;
use crate::graph::sink::GraphSink;
use crate::graph::{Article, Artwork, GraphEntity, Label, Person, PortraitPage, VitalEvent};
use crate::identity::{IdentityResolver, PersonId};
use crate::name::CanonicalKey;
use crate::parse::{parse_bio, parse_date_range, split_attributions};
use crate::record::{Corpus, PortraitRecord};

/// Numeric suffixes for the known same-subject duplicate pages.
///
/// Two source pages portray the same sitter; without a suffix their
/// artworks would mint the same URI. Documented corpus anomaly, matched
/// by page URL.
pub const DUPLICATE_PORTRAIT_SUFFIXES: &[(&str, &str)] = &[
    (
        "http://www.schrijverskabinet.nl/portret/anna-maria-van-schurman/",
        "-1",
    ),
    (
        "http://www.schrijverskabinet.nl/portret/anna-maria-van-schurman-2/",
        "-2",
    ),
];

/// Phrase joining an article title to its author ("by").
const ARTICLE_BY: &str = " door ";

/// One recovered per-record failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Page URL of the offending record.
    pub record_url: String,
    /// Record field that failed to parse.
    pub field: &'static str,
    /// What went wrong.
    pub message: String,
}

/// Summary of an assembly run.
#[derive(Debug, Clone, Default)]
pub struct AssemblyReport {
    /// Records processed.
    pub records: usize,
    /// Artworks emitted.
    pub artworks: usize,
    /// Articles emitted.
    pub articles: usize,
    /// Recovered failures, in encounter order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Assembles graph entities from portrait records.
///
/// The assembler borrows the resolver for the duration of the run, so
/// identifier assignment is strictly ordered: the first record to mention
/// a canonical name decides its identifier.
#[derive(Debug)]
pub struct GraphAssembler<'a, S> {
    resolver: &'a mut IdentityResolver,
    sink: &'a mut S,
    config: &'a PipelineConfig,
    links: &'a ArtistLinks,
    report: AssemblyReport,
}

impl<'a, S: GraphSink> GraphAssembler<'a, S> {
    /// Creates an assembler writing into the given sink.
    pub fn new(
        resolver: &'a mut IdentityResolver,
        sink: &'a mut S,
        config: &'a PipelineConfig,
        links: &'a ArtistLinks,
    ) -> Self {
        Self {
            resolver,
            sink,
            config,
            links,
            report: AssemblyReport::default(),
        }
    }

    /// Processes every record in corpus order and returns the report.
    ///
    /// # Errors
    ///
    /// Only sink failures abort; malformed record fields degrade to
    /// diagnostics in the report.
    pub fn assemble(mut self, corpus: &Corpus) -> PipelineResult<AssemblyReport> {
        for (url, record) in &corpus.portraits {
            self.assemble_record(url, record)?;
        }
        Ok(self.report)
    }

    fn assemble_record(&mut self, url: &str, record: &PortraitRecord) -> PipelineResult<()> {
        self.report.records += 1;

        let subject_id = self.resolver.resolve(&record.title);
        let mut person = self.build_subject(url, record, subject_id.clone());

        let page = PortraitPage {
            url: url.to_string(),
            quote: record.quote.clone(),
            main_entity: subject_id.clone(),
        };
        person.main_entity_of_page = Some(url.to_string());

        if let Some(article) = self.build_article(url, record, &subject_id) {
            person.subject_of.push(article.id.clone());
            self.sink.emit(GraphEntity::Article(article))?;
            self.report.articles += 1;
        }

        if let Some(artwork) = self.build_artwork(url, record, &subject_id) {
            person.subject_of.push(artwork.id.clone());
            self.sink.emit(GraphEntity::Artwork(artwork))?;
            self.report.artworks += 1;
        }

        self.sink.emit(GraphEntity::Person(person))?;
        self.sink.emit(GraphEntity::Page(page))?;
        Ok(())
    }

    /// Builds the page's subject person from the title, biography line,
    /// and external-profile link.
    fn build_subject(&mut self, url: &str, record: &PortraitRecord, id: PersonId) -> Person {
        let mut person = Person::with_name(id, record.title.clone());
        person.disambiguating_description = record.subtitle.clone();
        person.depiction = record.depiction.clone();

        if let Some(profile_url) = record.dbnl.url.clone() {
            if let Some(same_as) = self.profile_same_as(url, &profile_url) {
                person.same_as.push(same_as);
            }
        }

        if let Some(bio) = record.bio.as_deref() {
            let fields = parse_bio(bio);
            if fields.is_empty() {
                self.diagnose(url, "bio", format!("nothing recovered from {bio:?}"));
            }
            person.birth = VitalEvent::from_parts(fields.birth_place, fields.birth_year);
            person.death = VitalEvent::from_parts(fields.death_place, fields.death_year);
        }

        person
    }

    /// Derives an external-catalog same-as URI from a fully qualified
    /// profile URL.
    fn profile_same_as(&mut self, record_url: &str, profile_url: &str) -> Option<String> {
        if !profile_url.contains("http") {
            // Relative or placeholder link, nothing to derive.
            return None;
        }
        match profile_url.split_once("?id=") {
            Some((_, id)) if !id.is_empty() => {
                Some(format!("{}{}", self.config.profile_catalog_prefix, id))
            }
            _ => {
                self.diagnose(
                    record_url,
                    "dbnl",
                    format!("profile URL has no ?id= parameter: {profile_url}"),
                );
                None
            }
        }
    }

    /// Builds the scholarly article, when the record carries one.
    fn build_article(
        &mut self,
        url: &str,
        record: &PortraitRecord,
        subject: &PersonId,
    ) -> Option<Article> {
        let text = record.article.name.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }
        let Some(article_url) = record.article.url.as_deref() else {
            self.diagnose(url, "article", "article has text but no URL".to_string());
            return None;
        };
        let Some((title, author_name)) = text.rsplit_once(ARTICLE_BY) else {
            self.diagnose(
                url,
                "article",
                format!("article text has no author clause: {text:?}"),
            );
            return None;
        };

        let author_name = author_name.trim();
        let author_id = self.resolver.resolve(author_name);
        Some(Article {
            id: article_url.to_string(),
            title: title.trim().to_string(),
            author: Person::with_name(author_id, author_name),
            subject: subject.clone(),
        })
    }

    /// Builds the portrait artwork, when the record carries attribution
    /// text.
    fn build_artwork(
        &mut self,
        url: &str,
        record: &PortraitRecord,
        subject: &PersonId,
    ) -> Option<Artwork> {
        let painter = record.painter.as_deref()?.trim();
        if painter.is_empty() {
            return None;
        }

        let names = split_attributions(painter);
        if names.is_empty() {
            self.diagnose(
                url,
                "painter",
                format!("no attribution recovered from {painter:?}"),
            );
            return None;
        }

        let mut artists = Vec::with_capacity(names.len());
        for name in names {
            let id = self.resolver.resolve(&name);
            let external = id
                .as_uri()
                .and_then(|uri| self.links.lookup(uri))
                .map(str::to_string);
            let mut artist = Person::with_name(id, name);
            if let Some(external) = external {
                artist.same_as.push(external);
            }
            artists.push(artist);
        }

        let key = CanonicalKey::from_display(&record.title);
        let suffix = DUPLICATE_PORTRAIT_SUFFIXES
            .iter()
            .find(|(duplicate, _)| *duplicate == url)
            .map_or("", |(_, suffix)| *suffix);

        let mut artwork = Artwork {
            id: format!("{}{}{}", self.config.artwork_namespace, key, suffix),
            artists,
            subject: subject.clone(),
            labels: vec![
                Label::nl(format!("Portret van {}", record.title)),
                Label::en(format!("Portrait of {}", record.title)),
            ],
            depiction: record.artdepiction.clone(),
            display_date: record.date.clone(),
            publication: record.date.as_deref().and_then(parse_date_range),
            description: None,
            same_as: Vec::new(),
        };

        if let Some(origin_name) = record.origin.name.as_deref() {
            if !origin_name.trim().is_empty() {
                artwork.description = Some(origin_name.trim().to_string());
            }
        }
        if let Some(origin_url) = record.origin.url.as_deref() {
            artwork.same_as.push(origin_url.to_string());
        }

        Some(artwork)
    }

    fn diagnose(&mut self, record_url: &str, field: &'static str, message: String) {
        warn!(record = record_url, field, %message, "record field degraded");
        self.report.diagnostics.push(Diagnostic {
            record_url: record_url.to_string(),
            field,
            message,
        });
    }
}
