//! Enhancer configuration: selectors, timings, and limits.
//!
//! DESIGN
//! ======
//! Defaults match the markup emitted by the news templates. A page may embed
//! `<script type="application/json" id="page-enhancer-config">` to override
//! any subset of fields; unnamed fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::EnhanceError;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "page-enhancer-config";

pub const DEFAULT_STAGGER_MS: u32 = 150;
pub const DEFAULT_TRENDING_LIMIT: usize = 8;
pub const DEFAULT_FALLBACK_LABEL: &str = "News";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub card_selector: String,
    pub stagger_ms: u32,

    pub theme_attribute: String,
    pub theme_switch_id: String,
    pub theme_storage_key: String,
    /// Fall back to `prefers-color-scheme` when nothing is stored or rendered.
    pub follow_system_theme: bool,

    pub published_selector: String,
    pub published_attribute: String,
    pub published_text_selector: String,

    /// Images eligible for replacement when they fail to load. Page chrome
    /// such as logos and avatars is left alone.
    pub fallback_image_selector: String,
    pub fallback_attribute: String,
    pub fallback_label: String,
    pub fallback_class: String,

    pub ticker_track_id: String,

    pub trending_list_id: String,
    pub title_selector: String,
    pub trending_limit: usize,

    pub search_form_selector: String,
    pub search_input_selector: String,
    pub category_input_selector: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            card_selector: ".news-card".into(),
            stagger_ms: DEFAULT_STAGGER_MS,
            theme_attribute: "data-theme".into(),
            theme_switch_id: "themeSwitch".into(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.into(),
            follow_system_theme: false,
            published_selector: ".published".into(),
            published_attribute: "data-published".into(),
            published_text_selector: ".published-text".into(),
            fallback_image_selector: "img[data-fallback-text], .news-card img".into(),
            fallback_attribute: "data-fallback-text".into(),
            fallback_label: DEFAULT_FALLBACK_LABEL.into(),
            fallback_class: "thumb-fallback".into(),
            ticker_track_id: "tickerTrack".into(),
            trending_list_id: "trendingList".into(),
            title_selector: ".card-title".into(),
            trending_limit: DEFAULT_TRENDING_LIMIT,
            search_form_selector: ".search-hero__form".into(),
            search_input_selector: ".search-hero__input".into(),
            category_input_selector: "input[name=\"category\"]".into(),
        }
    }
}

impl EnhancerConfig {
    /// Parse config overrides from a JSON object.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Load overrides from the inline config element, if the page has one.
    ///
    /// Malformed JSON is logged and ignored.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page enhancer config: {err}");
                Self::default()
            }
        }
    }
}
