//! The page surface the controllers are allowed to touch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers only ever talk to the document and storage through
//! [`PageHost`]. The browser build wires it to `web-sys`
//! (`crate::browser::BrowserHost`); tests use
//! [`crate::memory_host::MemoryHost`].
//!
//! Optional elements are reported through `Option`/`bool` rather than
//! errors: a page without a theme button or a font selector is a valid page.

use crate::error::HostError;

pub trait PageHost {
    /// Read a persisted preference. `Ok(None)` when the key was never written.
    fn storage_get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Persist a preference.
    fn storage_set(&mut self, key: &str, value: &str) -> Result<(), HostError>;

    /// Current value of an attribute on the document body.
    fn body_attribute(&self, name: &str) -> Option<String>;

    fn set_body_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError>;

    /// Set an inline style property (including CSS custom properties) on the body.
    fn set_body_style_property(&mut self, name: &str, value: &str) -> Result<(), HostError>;

    /// Whether form control `id` exists. An element with that id that is not
    /// a value-bearing control does not count.
    fn has_control(&self, id: &str) -> bool;

    /// Replace the text content of element `id`. Returns `false` when the element is absent.
    fn set_element_text(&mut self, id: &str, text: &str) -> bool;

    /// Current value of form control `id`, if it exists.
    fn element_value(&self, id: &str) -> Option<String>;

    /// Set the value of form control `id`. Returns `false` when the element is absent.
    ///
    /// Implementations must not fire the control's change notification.
    fn set_element_value(&mut self, id: &str, value: &str) -> bool;

    /// Vertical scroll offset of the viewport in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Ask for exactly one `PageController::run_frame` call before the next repaint.
    fn request_frame(&mut self) -> Result<(), HostError>;
}
