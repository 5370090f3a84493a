use log::{debug, warn, Level};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const SETTINGS_ELEMENT_ID: &str = "site-motion-settings";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Vertical offset (px) past which the header counts as scrolled.
    pub scroll_threshold: f64,
    pub reveal_threshold: f64,
    /// Root margin narrowing section detection to the middle band of the viewport.
    pub highlight_root_margin: String,
    pub fade_delay_ms: u32,
    /// Viewports narrower than this are treated as mobile and skip parallax.
    pub mobile_breakpoint: f64,
    pub parallax: ParallaxSettings,
    pub selectors: Selectors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            reveal_threshold: 0.1,
            highlight_root_margin: "-40% 0px -60% 0px".to_string(),
            fade_delay_ms: 150,
            mobile_breakpoint: 768.0,
            parallax: ParallaxSettings::default(),
            selectors: Selectors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    pub container_divisor_x: f64,
    pub container_divisor_y: f64,
    pub layer_divisor: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            container_divisor_x: 50.0,
            container_divisor_y: 30.0,
            layer_divisor: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle_id: String,
    pub menu_wrapper: String,
    pub nav_link: String,
    pub header: String,
    pub reveal_item: String,
    pub scroll_section: String,
    pub feature_item: String,
    pub feature_preview: String,
    pub pricing_switch_id: String,
    pub plan_price: String,
    pub price_value: String,
    pub hero_graphics: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle_id: "menu-toggle".to_string(),
            menu_wrapper: ".nav-menu-wrapper".to_string(),
            nav_link: ".nav-link".to_string(),
            header: ".main-header".to_string(),
            reveal_item: ".reveal-item".to_string(),
            scroll_section: ".scroll-section".to_string(),
            feature_item: ".feature-item".to_string(),
            feature_preview: ".feature-preview-item".to_string(),
            pricing_switch_id: "pricing-switch".to_string(),
            plan_price: ".plan-price".to_string(),
            price_value: ".price-value".to_string(),
            hero_graphics: ".hero-graphics".to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults when the block
    /// is missing or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(SETTINGS_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            debug!("no #{} block, using default settings", SETTINGS_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring malformed #{}: {}", SETTINGS_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
