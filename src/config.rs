//! Site configuration: transition timings, markup selectors, trail appearance.
//!
//! Every field has a default matching the stock page. A page may override any
//! subset by embedding `<script type="application/json" id="site-config">`;
//! missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::PLACEHOLDER_IMAGE;

pub const DEFAULT_REVEAL_MS: u32 = 10;
pub const DEFAULT_EXIT_MS: u32 = 300;
pub const DEFAULT_ENTER_MS: u32 = 400;
pub const DEFAULT_CLOSE_MS: u32 = 300;
pub const DEFAULT_SPARK_LIFETIME_MS: u32 = 2000;
pub const DEFAULT_SPARK_PROBABILITY: f64 = 0.05;
pub const DEFAULT_HOME_SECTION: &str = "home";

/// Errors raised while reading page-supplied configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Fixed delays used to sequence class toggles around CSS transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    /// Delay between revealing an overlay and marking it active.
    pub reveal_ms: u32,
    /// Length of the section exit animation.
    pub exit_ms: u32,
    /// Length of the section enter animation.
    pub enter_ms: u32,
    /// Delay between deactivating an overlay and hiding/detaching it.
    pub close_ms: u32,
    /// How long a trail spark stays on the page.
    pub spark_lifetime_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_ms: DEFAULT_REVEAL_MS,
            exit_ms: DEFAULT_EXIT_MS,
            enter_ms: DEFAULT_ENTER_MS,
            close_ms: DEFAULT_CLOSE_MS,
            spark_lifetime_ms: DEFAULT_SPARK_LIFETIME_MS,
        }
    }
}

/// Selectors and attribute names the bindings look up in the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Markup {
    pub nav_item: String,
    pub section: String,
    pub section_attr: String,
    pub logo: String,
    pub modal_id: String,
    pub modal_body_id: String,
    pub modal_close: String,
    /// Class (without the dot) carried by every "view details" trigger.
    pub trigger_class: String,
    pub project_attr: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            nav_item: ".nav-item".to_owned(),
            section: ".content-section".to_owned(),
            section_attr: "data-section".to_owned(),
            logo: ".logo".to_owned(),
            modal_id: "project-modal".to_owned(),
            modal_body_id: "modal-body".to_owned(),
            modal_close: ".modal-close".to_owned(),
            trigger_class: "view-details-btn".to_owned(),
            project_attr: "data-project".to_owned(),
        }
    }
}

impl Markup {
    /// CSS selector matching trigger elements.
    #[must_use]
    pub fn trigger_selector(&self) -> String {
        format!(".{}", self.trigger_class)
    }
}

/// Appearance of the decorative cursor trail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    /// Chance that a single pointer-move event spawns a spark.
    pub probability: f64,
    pub size_px: f64,
    pub color: String,
    pub z_index: i32,
    /// CSS keyframes name used for the fade.
    pub animation: String,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            probability: DEFAULT_SPARK_PROBABILITY,
            size_px: 3.0,
            color: "#9933ff".to_owned(),
            z_index: 1000,
            animation: "starFade".to_owned(),
        }
    }
}

/// Complete configuration for one page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub timings: Timings,
    pub markup: Markup,
    pub trail: TrailConfig,
    /// Section the logo control navigates to.
    pub home_section: String,
    /// Image shown when a gallery or lightbox image fails to load.
    pub placeholder_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            markup: Markup::default(),
            trail: TrailConfig::default(),
            home_section: DEFAULT_HOME_SECTION.to_owned(),
            placeholder_image: PLACEHOLDER_IMAGE.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse page-supplied overrides and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probability = self.trail.probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::Invalid(format!("trail.probability must be within [0, 1], got {probability}")));
        }
        if self.home_section.trim().is_empty() {
            return Err(ConfigError::Invalid("homeSection must not be empty".to_owned()));
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(ConfigError::Invalid("placeholderImage must not be empty".to_owned()));
        }
        let markup = &self.markup;
        let required = [
            ("markup.navItem", &markup.nav_item),
            ("markup.section", &markup.section),
            ("markup.sectionAttr", &markup.section_attr),
            ("markup.logo", &markup.logo),
            ("markup.modalId", &markup.modal_id),
            ("markup.modalBodyId", &markup.modal_body_id),
            ("markup.modalClose", &markup.modal_close),
            ("markup.triggerClass", &markup.trigger_class),
            ("markup.projectAttr", &markup.project_attr),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("{name} must not be empty")));
        }
        Ok(())
    }
}
