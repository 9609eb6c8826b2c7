//! Font preset controller.
//!
//! The preset is reflected as `data-font` on `<body>`. It is persisted only
//! when the visitor picks one from the selector; normalizing a stored value
//! on page load never writes back.

#[cfg(test)]
#[path = "font_test.rs"]
mod font_test;

use std::fmt;

use crate::config::PageConfig;
use crate::consts::{DEFAULT_FONT, FONT_ATTRIBUTE};
use crate::host::PageHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontPreset {
    Default,
    Grotesk,
    Mono,
    Tech,
}

impl FontPreset {
    pub const ALL: [Self; 4] = [Self::Default, Self::Grotesk, Self::Mono, Self::Tech];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grotesk => "grotesk",
            Self::Mono => "mono",
            Self::Tech => "tech",
        }
    }

    /// Exact match against current preset names. Legacy names are not accepted here.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.as_str() == raw)
    }
}

impl fmt::Display for FontPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Previously shipped preset names and what they became.
pub const LEGACY_FONT_MAP: [(&str, FontPreset); 5] = [
    ("modern", FontPreset::Default),
    ("default", FontPreset::Default),
    ("editorial", FontPreset::Grotesk),
    ("airy", FontPreset::Grotesk),
    ("mono", FontPreset::Mono),
];

/// Translate a legacy name to its current equivalent; unmapped names pass through.
#[must_use]
pub fn migrate_legacy(raw: &str) -> &str {
    LEGACY_FONT_MAP
        .iter()
        .find(|(legacy, _)| *legacy == raw)
        .map_or(raw, |(_, preset)| preset.as_str())
}

/// Resolve any requested name to a valid preset.
#[must_use]
pub fn resolve_preset(raw: &str) -> FontPreset {
    FontPreset::parse(migrate_legacy(raw)).unwrap_or(DEFAULT_FONT)
}

/// Resolve a stored value; a missing key resolves to the default.
#[must_use]
pub fn resolve_stored(stored: Option<&str>) -> FontPreset {
    stored.map_or(DEFAULT_FONT, resolve_preset)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Write the resolved preset to storage.
    pub persist: bool,
}

#[derive(Debug, Clone)]
pub struct FontController {
    storage_key: String,
    select_id: String,
}

impl FontController {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { storage_key: config.font_key.clone(), select_id: config.font_select_id.clone() }
    }

    /// Resolve `preset`, apply it to the body, and keep the selector in sync.
    pub fn apply<H: PageHost>(&self, host: &mut H, preset: &str, options: ApplyOptions) -> FontPreset {
        let resolved = resolve_preset(preset);
        if let Err(err) = host.set_body_attribute(FONT_ATTRIBUTE, resolved.as_str()) {
            log::warn!("font: setting {FONT_ATTRIBUTE} failed: {err}");
        }
        if let Some(current) = host.element_value(&self.select_id)
            && current != resolved.as_str()
        {
            host.set_element_value(&self.select_id, resolved.as_str());
        }
        if options.persist {
            if let Err(err) = host.storage_set(&self.storage_key, resolved.as_str()) {
                log::warn!("font: persisting {resolved} failed: {err}");
            }
        }
        if resolved.as_str() != preset {
            log::debug!("font: requested {preset:?} resolved to {resolved}");
        }
        resolved
    }

    /// Apply the load-time preset.
    ///
    /// With a selector on the page the stored preference is honored. Without
    /// one there is no way for the visitor to choose, so the default is
    /// forced and storage is not read at all.
    pub fn initialize<H: PageHost>(&self, host: &mut H) -> FontPreset {
        if !host.has_control(&self.select_id) {
            if let Err(err) = host.set_body_attribute(FONT_ATTRIBUTE, DEFAULT_FONT.as_str()) {
                log::warn!("font: setting {FONT_ATTRIBUTE} failed: {err}");
            }
            return DEFAULT_FONT;
        }

        let stored = match host.storage_get(&self.storage_key) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("font: reading preference failed: {err}");
                None
            }
        };
        let initial = resolve_stored(stored.as_deref());
        self.apply(host, initial.as_str(), ApplyOptions::default());
        host.set_element_value(&self.select_id, initial.as_str());
        log::debug!("font: initialized to {initial} (stored {stored:?})");
        initial
    }

    /// Change handler for the selector: apply and persist.
    pub fn on_selected<H: PageHost>(&self, host: &mut H, value: &str) -> FontPreset {
        self.apply(host, value, ApplyOptions { persist: true })
    }
}
