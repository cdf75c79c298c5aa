//! Project catalog: the static, read-only set of records the dialog renders.
//!
//! DESIGN
//! ======
//! The catalog is built once at startup from JSON (embedded at compile time,
//! or supplied by the page) and never mutated afterwards. Loading performs
//! presence checks only; everything else about a record is display data.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::Deserialize;

/// Catalog shipped with the crate.
const BUILTIN_JSON: &str = include_str!("projects.json");

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("project at position {0} has an empty id")]
    EmptyId(usize),
    #[error("project '{id}' is missing {field}")]
    MissingField { id: String, field: &'static str },
}

/// Display data for one portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub external_links: Option<ExternalLinks>,
    #[serde(default)]
    pub is_playful: bool,
}

/// One gallery image. An empty `path` renders the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawImage")]
pub struct ImageRef {
    pub path: String,
    pub alt_text: String,
    pub caption: String,
}

/// Images may be written as a full object or as a bare note string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawImage {
    Full {
        path: String,
        #[serde(default, rename = "altText", alias = "alt")]
        alt_text: String,
        #[serde(default)]
        caption: String,
    },
    Note(String),
}

impl From<RawImage> for ImageRef {
    fn from(raw: RawImage) -> Self {
        match raw {
            RawImage::Full { path, alt_text, caption } => Self { path, alt_text, caption },
            RawImage::Note(note) => Self { path: String::new(), alt_text: note.clone(), caption: note },
        }
    }
}

/// Outbound links for a project. Either side may be absent or a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLinks {
    #[serde(default)]
    pub live_demo_url: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
}

impl ExternalLinks {
    /// The live demo URL, unless it is missing or a placeholder.
    #[must_use]
    pub fn live_demo(&self) -> Option<&str> {
        usable_url(self.live_demo_url.as_deref())
    }

    /// The repository URL, unless it is missing or a placeholder.
    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        usable_url(self.repository_url.as_deref())
    }
}

fn usable_url(raw: Option<&str>) -> Option<&str> {
    let url = raw?.trim();
    if url.is_empty() || url == "#" { None } else { Some(url) }
}

/// Immutable mapping from project id to record.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: HashMap<String, ProjectRecord>,
    order: Vec<String>,
}

impl Catalog {
    /// Load the catalog embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parse a JSON array of project records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    /// Build a catalog, rejecting empty or duplicate ids and empty titles.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut map = HashMap::with_capacity(records.len());
        let mut order = Vec::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if record.title.trim().is_empty() {
                return Err(CatalogError::MissingField { id: record.id, field: "title" });
            }
            if map.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            order.push(record.id.clone());
            map.insert(record.id.clone(), record);
        }
        Ok(Self { records: map, order })
    }

    /// Look up a record. A miss is logged and returns `None`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        let found = self.records.get(id);
        if found.is_none() {
            log::warn!("catalog: no project with id '{id}'");
        }
        found
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Project ids in the order they were declared.
    #[cfg(test)]
    pub(crate) fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
