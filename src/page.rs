//! Page controller: the one entry point the browser glue talks to.
//!
//! Owns the host and the three controllers. The controllers never call each
//! other; the page only sequences them.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::font::{ApplyOptions, FontController, FontPreset};
use crate::host::PageHost;
use crate::parallax::ParallaxUpdater;
use crate::theme::{Theme, ThemeController};

/// `document.readyState` value while the parser is still running.
pub const READY_STATE_LOADING: &str = "loading";

/// Whether `DOMContentLoaded` has already fired for a document in `ready_state`.
#[must_use]
pub fn dom_is_ready(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

/// What `initialize` applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialState {
    pub theme: Theme,
    pub font: FontPreset,
}

pub struct PageController<H: PageHost> {
    host: H,
    config: PageConfig,
    theme: ThemeController,
    font: FontController,
    parallax: ParallaxUpdater,
}

impl<H: PageHost> PageController<H> {
    #[must_use]
    pub fn new(host: H, config: PageConfig) -> Self {
        Self {
            theme: ThemeController::new(&config),
            font: FontController::new(&config),
            parallax: ParallaxUpdater::new(&config),
            host,
            config,
        }
    }

    /// DOM-ready hook: theme, then font, then the initial parallax write.
    pub fn initialize(&mut self) -> InitialState {
        let theme = self.theme.initialize(&mut self.host);
        let font = self.font.initialize(&mut self.host);
        self.parallax.initialize(&mut self.host);
        log::info!("page initialized: theme={theme} font={font}");
        InitialState { theme, font }
    }

    // --- Event handlers ---

    /// Theme button click.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.host)
    }

    /// Font selector change with the control's new value.
    pub fn select_font(&mut self, value: &str) -> FontPreset {
        self.font.on_selected(&mut self.host, value)
    }

    /// Scroll notification.
    pub fn on_scroll(&mut self) {
        self.parallax.on_scroll(&mut self.host);
    }

    /// Animation frame callback requested through [`PageHost::request_frame`].
    pub fn run_frame(&mut self) {
        self.parallax.run_frame(&mut self.host);
    }

    // --- Direct operations ---

    /// Apply a preset outside the change handler, e.g. from another control.
    pub fn apply_font_preset(&mut self, preset: &str, options: ApplyOptions) -> FontPreset {
        self.font.apply(&mut self.host, preset, options)
    }

    pub fn update_theme_toggle_button(&mut self, theme: Theme) {
        self.theme.update_toggle_button(&mut self.host, theme);
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.parallax.is_pending()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
