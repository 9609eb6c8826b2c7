//! Scroll-linked background offset.
//!
//! Scroll events can arrive many times per frame. Only the first one after
//! an update schedules a frame; the rest are dropped until that frame runs.
//! The offset is read when the frame executes, not when the event fired.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::config::PageConfig;
use crate::host::PageHost;

/// Magnitudes in this range print in plain decimal; outside it JavaScript
/// switches to exponent notation.
const PLAIN_DECIMAL_RANGE: std::ops::Range<f64> = 1e-6..1e21;

/// Render the offset for scroll position `scroll_y` the way a JavaScript
/// number prints inside a template string.
///
/// Zero scroll yields `"0px"`, never `"-0px"`. Magnitudes below `1e-6` or
/// from `1e21` up use exponent notation (`"-4e-7px"`, `"-1e+21px"`).
#[must_use]
pub fn offset_value(scroll_y: f64, factor: f64) -> String {
    let offset = -scroll_y * factor;
    if offset == 0.0 {
        // -0.0 would print as "-0"
        return "0px".to_owned();
    }
    if !offset.is_finite() || PLAIN_DECIMAL_RANGE.contains(&offset.abs()) {
        return format!("{offset}px");
    }
    let exp = format!("{offset:e}");
    if offset.abs() >= PLAIN_DECIMAL_RANGE.end {
        // positive exponents carry an explicit sign
        return format!("{}px", exp.replacen('e', "e+", 1));
    }
    format!("{exp}px")
}

#[derive(Debug, Clone)]
pub struct ParallaxUpdater {
    property: String,
    factor: f64,
    pending: bool,
}

impl ParallaxUpdater {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { property: config.offset_property.clone(), factor: config.parallax_factor, pending: false }
    }

    /// True between a scheduling scroll and the frame that services it.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Write the current offset immediately so the property is correct before any scroll.
    pub fn initialize<H: PageHost>(&mut self, host: &mut H) {
        self.update(host);
    }

    /// Scroll notification. Schedules at most one frame until that frame runs.
    ///
    /// If the host cannot schedule a frame the update runs inline.
    pub fn on_scroll<H: PageHost>(&mut self, host: &mut H) {
        if self.pending {
            return;
        }
        self.pending = true;
        if let Err(err) = host.request_frame() {
            log::warn!("parallax: frame request failed, updating inline: {err}");
            self.update(host);
        }
    }

    /// Frame callback: write the offset for the current scroll position.
    pub fn run_frame<H: PageHost>(&mut self, host: &mut H) {
        self.update(host);
    }

    fn update<H: PageHost>(&mut self, host: &mut H) {
        let value = offset_value(host.scroll_y(), self.factor);
        if let Err(err) = host.set_body_style_property(&self.property, &value) {
            log::warn!("parallax: setting {} failed: {err}", self.property);
        }
        self.pending = false;
    }
}
