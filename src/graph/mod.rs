//! Graph entity model.
//!
//! The typed entities the assembler produces and hands to the graph
//! writer. Shared shapes (language-tagged labels, place references,
//! birth/death events) are small structs composed into each entity
//! rather than inherited from a common base.
//!
//! Entities are created fresh per record per run; none of them is
//! persisted individually. The only durable state in the system is the
//! identity map behind [`PersonId`](crate::identity::PersonId).

pub mod sink;

use serde::{Deserialize, Serialize};

use crate::identity::PersonId;
use crate::name::CanonicalKey;
use crate::parse::PublicationWindow;

/// Language-tagged label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// BCP-47 language tag.
    pub language: String,
}

impl Label {
    /// Creates a Dutch label.
    #[must_use]
    pub fn nl(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: "nl".to_string(),
        }
    }

    /// Creates an English label.
    #[must_use]
    pub fn en(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: "en".to_string(),
        }
    }
}

/// A place, identified by its own normalized name.
///
/// Places are deliberately not resolved through the global identity map:
/// two mentions of the same place string share an identity within one
/// output document, and that is all the corpus supports. Nothing about a
/// place survives a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Document-scoped identity, the normalized place name.
    pub key: CanonicalKey,
    /// Display name.
    pub name: String,
}

impl Place {
    /// Creates a place from its display name.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: CanonicalKey::from_display(&name),
            name,
        }
    }
}

/// Birth or death: an optional place plus an optional year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalEvent {
    /// Where it happened, when known.
    pub place: Option<Place>,
    /// Year digits, when known.
    pub year: Option<String>,
}

impl VitalEvent {
    /// Builds the event from parsed bio fields; None when neither part is
    /// known.
    #[must_use]
    pub fn from_parts(place: Option<String>, year: Option<String>) -> Option<Self> {
        if place.is_none() && year.is_none() {
            return None;
        }
        Some(Self {
            place: place.map(Place::from_name),
            year,
        })
    }
}

/// A person in the graph: page subject, painter, or article author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Stable or anonymous identifier.
    pub id: PersonId,
    /// Display names.
    pub names: Vec<String>,
    /// External same-as URIs.
    pub same_as: Vec<String>,
    /// Birth place and year, when parsed from the biography line.
    pub birth: Option<VitalEvent>,
    /// Death place and year, when parsed from the biography line.
    pub death: Option<VitalEvent>,
    /// Disambiguating sub-heading from the source page.
    pub disambiguating_description: Option<String>,
    /// Image of the person.
    pub depiction: Option<String>,
    /// Identifiers of the article and artwork built for this person.
    pub subject_of: Vec<String>,
    /// URL of the page whose main entity this person is.
    pub main_entity_of_page: Option<String>,
}

impl Person {
    /// Bare person carrying just an identifier and a display name, the
    /// starting point for painters and article authors.
    #[must_use]
    pub fn with_name(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            names: vec![name.into()],
            same_as: Vec::new(),
            birth: None,
            death: None,
            disambiguating_description: None,
            depiction: None,
            subject_of: Vec::new(),
            main_entity_of_page: None,
        }
    }
}

/// The portrait artwork depicting a page's subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// URI minted from the subject's canonical key.
    pub id: String,
    /// Attributed painters; more than one entry means shared, corrected,
    /// or uncertain attribution.
    pub artists: Vec<Person>,
    /// The depicted person.
    pub subject: PersonId,
    /// Bilingual portrait labels.
    pub labels: Vec<Label>,
    /// Image of the artwork.
    pub depiction: Option<String>,
    /// Raw display date from the source page.
    pub display_date: Option<String>,
    /// Parsed creation window; at most one per artwork.
    pub publication: Option<PublicationWindow>,
    /// Holding collection display name.
    pub description: Option<String>,
    /// External same-as URIs (the holding collection's catalog entry).
    pub same_as: Vec<String>,
}

/// A scholarly article about a page's subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// The article's URL.
    pub id: String,
    /// Article title, with the author clause split off.
    pub title: String,
    /// The article's author.
    pub author: Person,
    /// The person the article is about.
    pub subject: PersonId,
}

/// The scraped page as a creative work wrapping the person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortraitPage {
    /// Canonical page URL.
    pub url: String,
    /// Representative quote shown on the page.
    pub quote: Option<String>,
    /// The person this page is about (back-linked from
    /// [`Person::main_entity_of_page`]).
    pub main_entity: PersonId,
}

/// One typed entity handed to the graph writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GraphEntity {
    /// A person.
    Person(Person),
    /// A portrait artwork.
    Artwork(Artwork),
    /// A scholarly article.
    Article(Article),
    /// A source page wrapper.
    Page(PortraitPage),
}
