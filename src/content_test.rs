use super::*;
use crate::catalog::{Catalog, ExternalLinks};

fn demo() -> ProjectRecord {
    ProjectRecord {
        id: "demo".to_owned(),
        title: "Demo Project".to_owned(),
        overview: "Overview".to_owned(),
        description: "Description".to_owned(),
        features: vec!["f1".to_owned()],
        tech_stack: vec!["X".to_owned()],
        challenges: "Challenges".to_owned(),
        impact: "Impact".to_owned(),
        images: Vec::new(),
        external_links: None,
        is_playful: false,
    }
}

// =============================================================
// Layout
// =============================================================

#[test]
fn demo_record_renders_title_feature_and_tag_without_gallery() {
    let content = ModalContent::from_record(&demo());
    assert_eq!(content.title, "Demo Project");
    assert_eq!(content.features(), ["f1".to_owned()]);
    assert_eq!(content.tags(), ["X".to_owned()]);
    assert!(content.gallery().is_none());
}

#[test]
fn blocks_follow_display_order() {
    let mut record = demo();
    record.images.push(crate::catalog::ImageRef {
        path: "a.png".to_owned(),
        alt_text: "A".to_owned(),
        caption: "cap".to_owned(),
    });
    record.external_links = Some(ExternalLinks {
        live_demo_url: Some("https://demo.test".to_owned()),
        repository_url: Some("https://git.test/demo".to_owned()),
    });
    let headings = ModalContent::from_record(&record)
        .blocks
        .iter()
        .map(Block::heading)
        .collect::<Vec<_>>();
    assert_eq!(
        headings,
        vec![
            GALLERY_HEADING,
            DESCRIPTION_HEADING,
            FEATURES_HEADING,
            TECH_HEADING,
            CHALLENGES_HEADING,
            IMPACT_HEADING,
            LINKS_HEADING,
        ]
    );
}

#[test]
fn gallery_keeps_image_order() {
    let catalog = Catalog::builtin().unwrap();
    let content = ModalContent::from_record(catalog.get("ai-weather-iot").unwrap());
    let gallery = content.gallery().unwrap();
    assert_eq!(gallery.len(), 2);
    assert!(gallery[0].path.ends_with("system-overview.jpg"));
    assert!(gallery[1].path.ends_with("dashboard-interface.jpg"));
}

#[test]
fn empty_prose_fields_are_skipped() {
    let mut record = demo();
    record.challenges = "   ".to_owned();
    record.impact.clear();
    let content = ModalContent::from_record(&record);
    assert!(
        !content
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Prose { heading, .. } if *heading == CHALLENGES_HEADING || *heading == IMPACT_HEADING))
    );
}

#[test]
fn placeholder_links_are_dropped() {
    let mut record = demo();
    record.external_links =
        Some(ExternalLinks { live_demo_url: Some("https://demo.test".to_owned()), repository_url: Some("#".to_owned()) });
    let content = ModalContent::from_record(&record);
    let links = content
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Links(links) => Some(links.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(links, vec![Link { label: "Live Demo", url: "https://demo.test".to_owned() }]);
}

#[test]
fn links_block_omitted_when_all_placeholders() {
    let catalog = Catalog::builtin().unwrap();
    let content = ModalContent::from_record(catalog.get("forest-fire-ai").unwrap());
    assert!(!content.blocks.iter().any(|b| matches!(b, Block::Links(_))));
}

#[test]
fn playful_flag_is_carried() {
    let mut record = demo();
    record.is_playful = true;
    assert!(ModalContent::from_record(&record).playful);
}

// =============================================================
// Image sources
// =============================================================

#[test]
fn image_src_uses_placeholder_for_empty_path() {
    assert_eq!(image_src("", "ph.svg"), "ph.svg");
    assert_eq!(image_src("a.png", "ph.svg"), "a.png");
}

#[test]
fn fallback_src_swaps_once() {
    assert_eq!(fallback_src("missing.png", "ph.svg"), Some("ph.svg"));
    assert_eq!(fallback_src("ph.svg", "ph.svg"), None);
}
