//! Page configuration.
//!
//! Every field defaults to the site's stock markup, so most pages never
//! configure anything. A page with different element ids or storage keys
//! can embed an override as JSON:
//!
//! ```html
//! <script type="application/json" id="site-prefs-config">
//!   { "font_select_id": "typeface", "parallax_factor": 0.02 }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BG_OFFSET_PROPERTY, FONT_SELECT_ID, FONT_STORAGE_KEY, PARALLAX_FACTOR, THEME_STORAGE_KEY, THEME_TOGGLE_ID,
};
use crate::error::HostError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_key: String,
    pub font_key: String,
    pub theme_toggle_id: String,
    pub font_select_id: String,
    pub offset_property: String,
    pub parallax_factor: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_STORAGE_KEY.to_owned(),
            font_key: FONT_STORAGE_KEY.to_owned(),
            theme_toggle_id: THEME_TOGGLE_ID.to_owned(),
            font_select_id: FONT_SELECT_ID.to_owned(),
            offset_property: BG_OFFSET_PROPERTY.to_owned(),
            parallax_factor: PARALLAX_FACTOR,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, HostError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| HostError::Config(err.to_string()))?;
        if !config.parallax_factor.is_finite() {
            return Err(HostError::Config("parallax_factor must be finite".into()));
        }
        if !config.offset_property.starts_with("--") {
            return Err(HostError::Config(format!(
                "offset_property must be a custom property, got {:?}",
                config.offset_property
            )));
        }
        Ok(config)
    }
}
