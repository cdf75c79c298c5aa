use super::*;

fn record(id: &str, title: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        overview: String::new(),
        description: String::new(),
        features: Vec::new(),
        tech_stack: Vec::new(),
        challenges: String::new(),
        impact: String::new(),
        images: Vec::new(),
        external_links: None,
        is_playful: false,
    }
}

// =============================================================
// Built-in catalog
// =============================================================

#[test]
fn builtin_catalog_parses() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 3);
    let ids = catalog.ids().collect::<Vec<_>>();
    assert_eq!(ids, vec!["ai-weather-iot", "forest-fire-ai", "intern-frontend"]);
}

#[test]
fn builtin_note_image_becomes_placeholder_entry() {
    let catalog = Catalog::builtin().unwrap();
    let intern = catalog.get("intern-frontend").unwrap();
    assert_eq!(intern.images.len(), 1);
    assert!(intern.images[0].path.is_empty());
    assert_eq!(intern.images[0].caption, "Placeholder for interface screenshots");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_json_reads_camel_case_fields() {
    let raw = r##"[{
        "id": "demo",
        "title": "Demo Project",
        "features": ["f1"],
        "techStack": ["X"],
        "images": [{ "path": "a.png", "altText": "A", "caption": "cap" }],
        "externalLinks": { "liveDemoUrl": "https://demo.test", "repositoryUrl": "#" },
        "isPlayful": true
    }]"##;
    let catalog = Catalog::from_json(raw).unwrap();
    let demo = catalog.get("demo").unwrap();
    assert_eq!(demo.tech_stack, vec!["X".to_owned()]);
    assert_eq!(demo.images[0].alt_text, "A");
    assert!(demo.is_playful);
    let links = demo.external_links.as_ref().unwrap();
    assert_eq!(links.live_demo(), Some("https://demo.test"));
    assert_eq!(links.repository(), None);
}

#[test]
fn from_json_accepts_short_alt_key() {
    let raw = r#"[{ "id": "p", "title": "P", "images": [{ "path": "x.jpg", "alt": "short" }] }]"#;
    let catalog = Catalog::from_json(raw).unwrap();
    assert_eq!(catalog.get("p").unwrap().images[0].alt_text, "short");
}

#[test]
fn from_json_defaults_optional_fields() {
    let catalog = Catalog::from_json(r#"[{ "id": "p", "title": "P" }]"#).unwrap();
    let p = catalog.get("p").unwrap();
    assert!(p.features.is_empty());
    assert!(p.images.is_empty());
    assert!(p.external_links.is_none());
    assert!(!p.is_playful);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

// =============================================================
// Presence checks
// =============================================================

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::from_records(vec![record("a", "A"), record("a", "Again")]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
}

#[test]
fn empty_id_is_rejected() {
    let err = Catalog::from_records(vec![record("a", "A"), record("  ", "B")]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyId(1)));
}

#[test]
fn empty_title_is_rejected() {
    let err = Catalog::from_records(vec![record("a", "")]).unwrap_err();
    assert!(matches!(err, CatalogError::MissingField { field: "title", .. }));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_miss_returns_none() {
    let catalog = Catalog::from_records(vec![record("a", "A")]).unwrap();
    assert!(catalog.get("missing").is_none());
    assert!(!catalog.contains("missing"));
    assert!(catalog.contains("a"));
}

#[test]
fn default_catalog_is_empty() {
    let catalog = Catalog::default();
    assert!(catalog.is_empty());
    assert_eq!(catalog.ids().count(), 0);
}

#[test]
fn placeholder_urls_are_not_usable() {
    let links = ExternalLinks { live_demo_url: Some("  ".to_owned()), repository_url: None };
    assert_eq!(links.live_demo(), None);
    assert_eq!(links.repository(), None);
}
