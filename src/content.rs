//! Dialog content model.
//!
//! A [`ProjectRecord`] is turned into an ordered list of blocks before it
//! touches the page, so what the dialog shows for a record can be checked
//! without a browser. The `dom` binding walks the blocks and builds nodes.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::catalog::{ImageRef, ProjectRecord};

pub const GALLERY_HEADING: &str = "📸 Project Gallery";
pub const DESCRIPTION_HEADING: &str = "📋 Project Description";
pub const FEATURES_HEADING: &str = "✨ Key Features";
pub const TECH_HEADING: &str = "🛠️ Technology Stack";
pub const CHALLENGES_HEADING: &str = "🎯 Challenges & Solutions";
pub const IMPACT_HEADING: &str = "🌟 Impact & Results";
pub const LINKS_HEADING: &str = "🔗 Links";
pub const PLAYFUL_BADGE: &str = "For fun";

/// Everything the dialog body shows for one record, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub overview: String,
    pub playful: bool,
    pub blocks: Vec<Block>,
}

/// One headed region of the dialog body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Gallery(Vec<GalleryItem>),
    Prose { heading: &'static str, body: String },
    Features(Vec<String>),
    TechStack(Vec<String>),
    Links(Vec<Link>),
}

impl Block {
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Gallery(_) => GALLERY_HEADING,
            Self::Prose { heading, .. } => *heading,
            Self::Features(_) => FEATURES_HEADING,
            Self::TechStack(_) => TECH_HEADING,
            Self::Links(_) => LINKS_HEADING,
        }
    }
}

/// A clickable gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub path: String,
    pub alt_text: String,
    pub caption: String,
}

impl From<&ImageRef> for GalleryItem {
    fn from(image: &ImageRef) -> Self {
        Self { path: image.path.clone(), alt_text: image.alt_text.clone(), caption: image.caption.clone() }
    }
}

/// An actionable outbound link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: String,
}

impl ModalContent {
    /// Lay out a record. Empty text fields and empty lists are left out.
    #[must_use]
    pub fn from_record(record: &ProjectRecord) -> Self {
        let mut blocks = Vec::new();

        if !record.images.is_empty() {
            blocks.push(Block::Gallery(record.images.iter().map(GalleryItem::from).collect()));
        }
        push_prose(&mut blocks, DESCRIPTION_HEADING, &record.description);
        if !record.features.is_empty() {
            blocks.push(Block::Features(record.features.clone()));
        }
        if !record.tech_stack.is_empty() {
            blocks.push(Block::TechStack(record.tech_stack.clone()));
        }
        push_prose(&mut blocks, CHALLENGES_HEADING, &record.challenges);
        push_prose(&mut blocks, IMPACT_HEADING, &record.impact);

        if let Some(links) = &record.external_links {
            let usable = [("Live Demo", links.live_demo()), ("Source Code", links.repository())]
                .into_iter()
                .filter_map(|(label, url)| url.map(|url| Link { label, url: url.to_owned() }))
                .collect::<Vec<_>>();
            if !usable.is_empty() {
                blocks.push(Block::Links(usable));
            }
        }

        Self { title: record.title.clone(), overview: record.overview.clone(), playful: record.is_playful, blocks }
    }

    #[cfg(test)]
    pub(crate) fn gallery(&self) -> Option<&[GalleryItem]> {
        self.blocks.iter().find_map(|block| match block {
            Block::Gallery(items) => Some(items.as_slice()),
            _ => None,
        })
    }

    #[cfg(test)]
    pub(crate) fn features(&self) -> &[String] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::Features(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn tags(&self) -> &[String] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::TechStack(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

fn push_prose(blocks: &mut Vec<Block>, heading: &'static str, body: &str) {
    if !body.trim().is_empty() {
        blocks.push(Block::Prose { heading, body: body.to_owned() });
    }
}

/// Source to put on an `<img>` for `path`; empty paths go straight to the placeholder.
#[must_use]
pub fn image_src<'a>(path: &'a str, placeholder: &'a str) -> &'a str {
    if path.trim().is_empty() { placeholder } else { path }
}

/// Replacement source after a load failure, or `None` if the image already
/// shows the placeholder (a failing placeholder must not loop).
#[must_use]
pub fn fallback_src<'a>(current: &str, placeholder: &'a str) -> Option<&'a str> {
    if current == placeholder { None } else { Some(placeholder) }
}
