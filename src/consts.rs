//! Shared constants: storage keys, element ids, attribute names, defaults.

use crate::font::FontPreset;
use crate::theme::Theme;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// `localStorage` key holding the font preset preference.
pub const FONT_STORAGE_KEY: &str = "font";

// ── Defaults ────────────────────────────────────────────────────

pub const DEFAULT_THEME: Theme = Theme::Dark;

pub const DEFAULT_FONT: FontPreset = FontPreset::Default;

// ── Document surface ────────────────────────────────────────────

/// Attribute on `<body>` consumed by the stylesheet to pick a palette.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute on `<body>` consumed by the stylesheet to pick a font stack.
pub const FONT_ATTRIBUTE: &str = "data-font";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub const FONT_SELECT_ID: &str = "font-select";

/// Optional `<script type="application/json">` element carrying a `PageConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "site-prefs-config";

// ── Parallax ────────────────────────────────────────────────────

/// CSS custom property on `<body>` that the background reads its offset from.
pub const BG_OFFSET_PROPERTY: &str = "--bg-offset-y";

/// Fraction of the scroll offset applied to the background. Very slight pan.
pub const PARALLAX_FACTOR: f64 = 0.04;

// ── Labels ──────────────────────────────────────────────────────

pub const LABEL_SWITCH_TO_LIGHT: &str = "Switch to light mode";

pub const LABEL_SWITCH_TO_DARK: &str = "Switch to dark mode";
