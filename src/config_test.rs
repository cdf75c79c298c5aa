use super::*;

#[test]
fn defaults_match_stock_page() {
    let cfg = SiteConfig::default();
    assert_eq!(
        cfg.timings,
        Timings { reveal_ms: 10, exit_ms: 300, enter_ms: 400, close_ms: 300, spark_lifetime_ms: 2000 }
    );
    assert_eq!(cfg.markup.modal_id, "project-modal");
    assert_eq!(cfg.markup.trigger_selector(), ".view-details-btn");
    assert_eq!(cfg.home_section, DEFAULT_HOME_SECTION);
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_empty_object_keeps_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn from_json_applies_partial_overrides() {
    let raw = r##"{
        "timings": { "exitMs": 150 },
        "markup": { "triggerClass": "details" },
        "trail": { "probability": 0.5, "color": "#ffffff" },
        "homeSection": "about"
    }"##;
    let cfg = SiteConfig::from_json(raw).unwrap();
    assert_eq!(cfg.timings.exit_ms, 150);
    assert_eq!(cfg.timings.enter_ms, DEFAULT_ENTER_MS);
    assert_eq!(cfg.markup.trigger_selector(), ".details");
    assert_eq!(cfg.markup.nav_item, ".nav-item");
    assert_eq!(cfg.trail.color, "#ffffff");
    assert_eq!(cfg.trail.size_px, 3.0);
    assert_eq!(cfg.home_section, "about");
}

#[test]
fn from_json_rejects_probability_out_of_range() {
    let err = SiteConfig::from_json(r#"{ "trail": { "probability": 1.5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("probability")));
}

#[test]
fn from_json_rejects_empty_selector() {
    let err = SiteConfig::from_json(r#"{ "markup": { "modalClose": " " } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("markup.modalClose")));
}

#[test]
fn from_json_rejects_empty_home_section() {
    let err = SiteConfig::from_json(r#"{ "homeSection": "" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn from_json_reports_parse_errors() {
    let err = SiteConfig::from_json(r#"{ "timings": { "exitMs": "slow" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
