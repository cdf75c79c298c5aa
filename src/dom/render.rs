//! Builds dialog body nodes from a [`ModalContent`].
//!
//! Titles, tags, captions and alt text go in as text. Prose fields are
//! authored in the catalog with light inline markup and go in as HTML.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::consts::FALLBACK_ATTR;
use crate::content::{Block, GalleryItem, ModalContent, PLAYFUL_BADGE, fallback_src, image_src};
use crate::error::SiteError;

use super::report;

/// A gallery image placed in the dialog, paired with what the lightbox shows
/// when it is clicked.
pub struct RenderedImage {
    pub element: HtmlImageElement,
    pub item: GalleryItem,
}

/// Replace the children of `region` with `content`.
pub fn render_content(
    document: &Document,
    region: &Element,
    content: &ModalContent,
    placeholder: &str,
) -> Result<Vec<RenderedImage>, SiteError> {
    region.set_inner_html("");

    append(region, &text(document, "h1", None, &content.title)?)?;
    if content.playful {
        append(region, &text(document, "span", Some("playful-badge"), PLAYFUL_BADGE)?)?;
    }
    if !content.overview.trim().is_empty() {
        let overview = create(document, "p", Some("project-overview"))?;
        let strong = create(document, "strong", None)?;
        strong.set_inner_html(&content.overview);
        append(&overview, &strong)?;
        append(region, &overview)?;
    }

    let mut images = Vec::new();
    for block in &content.blocks {
        append(region, &text(document, "h2", None, block.heading())?)?;
        match block {
            Block::Gallery(items) => {
                let gallery = create(document, "div", Some("project-gallery"))?;
                for item in items {
                    let (figure, element) = gallery_item(document, item, placeholder)?;
                    append(&gallery, &figure)?;
                    images.push(RenderedImage { element, item: item.clone() });
                }
                append(region, &gallery)?;
            }
            Block::Prose { body, .. } => {
                let paragraph = create(document, "p", None)?;
                paragraph.set_inner_html(body);
                append(region, &paragraph)?;
            }
            Block::Features(features) => {
                let list = create(document, "ul", None)?;
                for feature in features {
                    let entry = create(document, "li", None)?;
                    entry.set_inner_html(feature);
                    append(&list, &entry)?;
                }
                append(region, &list)?;
            }
            Block::TechStack(tags) => {
                let stack = create(document, "div", Some("tech-stack"))?;
                for tag in tags {
                    append(&stack, &text(document, "span", Some("tech-item"), tag)?)?;
                }
                append(region, &stack)?;
            }
            Block::Links(links) => {
                let row = create(document, "div", Some("project-links"))?;
                for link in links {
                    let anchor = text(document, "a", Some("project-link"), link.label)?;
                    anchor.set_attribute("href", &link.url)?;
                    anchor.set_attribute("target", "_blank")?;
                    anchor.set_attribute("rel", "noopener noreferrer")?;
                    append(&row, &anchor)?;
                }
                append(region, &row)?;
            }
        }
    }
    Ok(images)
}

fn gallery_item(
    document: &Document,
    item: &GalleryItem,
    placeholder: &str,
) -> Result<(Element, HtmlImageElement), SiteError> {
    let figure = create(document, "div", Some("gallery-item"))?;
    let image = image(document, Some("gallery-image"))?;
    image.set_src(image_src(&item.path, placeholder));
    image.set_alt(&item.alt_text);
    image.set_attribute("tabindex", "0")?;
    image.set_attribute("role", "button")?;
    append(&figure, &image)?;
    if !item.caption.trim().is_empty() {
        append(&figure, &text(document, "p", Some("image-caption"), &item.caption)?)?;
    }
    Ok((figure, image))
}

/// Swap `image` to the placeholder the first time it fails to load. A failing
/// placeholder is left alone.
pub fn fallback_on_error(image: &HtmlImageElement, placeholder: &str) -> EventListener {
    let target = image.clone();
    let placeholder = placeholder.to_owned();
    EventListener::new(image, "error", move |_| {
        let current = target.get_attribute("src").unwrap_or_default();
        if let Some(src) = fallback_src(&current, &placeholder) {
            report("mark fallback", target.set_attribute(FALLBACK_ATTR, "true"));
            target.set_src(src);
        }
    })
}

pub fn create(document: &Document, tag: &str, class: Option<&str>) -> Result<Element, SiteError> {
    let element = document.create_element(tag)?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    Ok(element)
}

pub fn text(document: &Document, tag: &str, class: Option<&str>, content: &str) -> Result<Element, SiteError> {
    let element = create(document, tag, class)?;
    element.set_text_content(Some(content));
    Ok(element)
}

pub fn image(document: &Document, class: Option<&str>) -> Result<HtmlImageElement, SiteError> {
    create(document, "img", class)?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| SiteError::Js("img element is not an HtmlImageElement".to_owned()))
}

pub fn append(parent: &Element, child: &Element) -> Result<(), SiteError> {
    parent.append_child(child)?;
    Ok(())
}
