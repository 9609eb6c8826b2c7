//! Dark/light theme controller.
//!
//! The theme is reflected as `data-theme` on `<body>` and persisted under the
//! `theme` storage key on every toggle. The toggle button's label always
//! names the theme a click would switch to.
//!
//! TRADE-OFFS
//! ==========
//! Page load resolves to dark unless the stored value is exactly "dark",
//! which means a stored "light" is not restored. This matches what the site
//! has always shipped; see `resolve_initial`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::PageConfig;
use crate::consts::{DEFAULT_THEME, LABEL_SWITCH_TO_DARK, LABEL_SWITCH_TO_LIGHT, THEME_ATTRIBUTE};
use crate::host::PageHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Theme applied on page load given the stored preference.
    ///
    /// Only an exact "dark" is recognized; everything else, including
    /// "light", falls back to [`DEFAULT_THEME`].
    #[must_use]
    pub fn resolve_initial(stored: Option<&str>) -> Self {
        if stored == Some(Self::Dark.as_str()) { Self::Dark } else { DEFAULT_THEME }
    }

    /// Theme a toggle produces from the current attribute value.
    ///
    /// Anything that is not exactly "dark" counts as not-dark, so an absent
    /// or garbled attribute toggles to dark.
    #[must_use]
    pub fn toggled_from(current: Option<&str>) -> Self {
        if current == Some(Self::Dark.as_str()) { Self::Light } else { Self::Dark }
    }

    /// Label for the toggle button while this theme is active.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => LABEL_SWITCH_TO_LIGHT,
            Self::Light => LABEL_SWITCH_TO_DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ThemeController {
    storage_key: String,
    toggle_id: String,
}

impl ThemeController {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { storage_key: config.theme_key.clone(), toggle_id: config.theme_toggle_id.clone() }
    }

    /// Apply the load-time theme and sync the button label. Never writes storage.
    pub fn initialize<H: PageHost>(&self, host: &mut H) -> Theme {
        let stored = match host.storage_get(&self.storage_key) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("theme: reading preference failed: {err}");
                None
            }
        };
        let theme = Theme::resolve_initial(stored.as_deref());
        self.apply(host, theme);
        log::debug!("theme: initialized to {theme} (stored {stored:?})");
        theme
    }

    /// Flip the current theme, persist it, and sync attribute and label.
    pub fn toggle<H: PageHost>(&self, host: &mut H) -> Theme {
        let current = host.body_attribute(THEME_ATTRIBUTE);
        let next = Theme::toggled_from(current.as_deref());
        self.apply(host, next);
        if let Err(err) = host.storage_set(&self.storage_key, next.as_str()) {
            log::warn!("theme: persisting {next} failed: {err}");
        }
        log::debug!("theme: toggled {current:?} -> {next}");
        next
    }

    /// Set the toggle button's text for `theme`. No-op without a button.
    pub fn update_toggle_button<H: PageHost>(&self, host: &mut H, theme: Theme) {
        if !host.set_element_text(&self.toggle_id, theme.toggle_label()) {
            log::debug!("theme: no #{} on page, label skipped", self.toggle_id);
        }
    }

    fn apply<H: PageHost>(&self, host: &mut H, theme: Theme) {
        if let Err(err) = host.set_body_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("theme: setting {THEME_ATTRIBUTE} failed: {err}");
        }
        self.update_toggle_button(host, theme);
    }
}
