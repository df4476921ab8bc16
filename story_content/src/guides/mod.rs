//! Guide document schema - the structural gate for authored long-form content.
//!
//! Guides are text documents with a TOML front-matter block delimited by
//! `+++` lines, followed by a free-form body. Every guide must declare
//! `title`, `author`, `description`, and `bannerImg`, all strings. Extra
//! fields pass through unrejected. Guides have no interaction with the
//! dialogue graph; this module is purely a shape check on authored content.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Delimiter line for the front-matter block.
const FRONT_MATTER_FENCE: &str = "+++";

/// Errors produced while validating a guide document.
#[derive(Debug, Error)]
pub enum GuideError {
    /// The document does not open with a `+++` front-matter fence.
    #[error("guide document has no front-matter block")]
    MissingFrontMatter,

    /// The opening fence has no matching closing fence.
    #[error("guide front matter is not terminated by a closing fence")]
    UnterminatedFrontMatter,

    /// The front matter is not valid TOML.
    #[error("guide front matter is not valid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A required field is absent.
    #[error("guide front matter is missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field is present but not a string.
    #[error("guide front matter field `{0}` must be a string")]
    NotAString(&'static str),
}

/// The declared metadata of a guide document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Reference to the guide's banner image.
    #[serde(rename = "bannerImg")]
    pub banner_img: String,
}

/// A validated guide document: metadata plus the free-form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideDocument {
    pub metadata: GuideMetadata,
    pub body: String,
}

impl GuideDocument {
    /// Parse and validate a guide document from its source text.
    ///
    /// Splits off the `+++`-fenced front matter, parses it as TOML, and
    /// checks that every required field is a string. The body is everything
    /// after the closing fence, with leading blank lines trimmed.
    pub fn parse(source: &str) -> Result<Self, GuideError> {
        let rest = source
            .strip_prefix(FRONT_MATTER_FENCE)
            .and_then(|r| r.strip_prefix('\n'))
            .ok_or(GuideError::MissingFrontMatter)?;

        let fence = format!("\n{FRONT_MATTER_FENCE}");
        let end = rest
            .find(&fence)
            .ok_or(GuideError::UnterminatedFrontMatter)?;

        let front_matter = &rest[..end];
        let body = rest[end + fence.len()..].trim_start_matches('\n').to_string();

        let table: toml::Table = toml::from_str(front_matter)?;
        let metadata = validate_metadata(&table)?;

        Ok(Self { metadata, body })
    }
}

/// Check the declared shape: all required fields present, all strings.
fn validate_metadata(table: &toml::Table) -> Result<GuideMetadata, GuideError> {
    let field = |name: &'static str| -> Result<String, GuideError> {
        let value = table.get(name).ok_or(GuideError::MissingField(name))?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or(GuideError::NotAString(name))
    };

    Ok(GuideMetadata {
        title: field("title")?,
        author: field("author")?,
        description: field("description")?,
        banner_img: field("bannerImg")?,
    })
}

/// A slug-keyed collection of validated guide documents.
#[derive(Debug, Clone, Default)]
pub struct GuideCollection {
    guides: HashMap<String, GuideDocument>,
}

impl GuideCollection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a guide source and add it under the given slug.
    pub fn add_guide(&mut self, slug: impl Into<String>, source: &str) -> Result<(), GuideError> {
        let document = GuideDocument::parse(source)?;
        self.guides.insert(slug.into(), document);
        Ok(())
    }

    /// Get a guide by slug.
    pub fn get_guide(&self, slug: &str) -> Option<&GuideDocument> {
        self.guides.get(slug)
    }

    /// Get the total number of guides.
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Iterate over all guides with their slugs.
    pub fn all_guides(&self) -> impl Iterator<Item = (&String, &GuideDocument)> {
        self.guides.iter()
    }
}
