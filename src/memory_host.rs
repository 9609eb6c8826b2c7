//! In-memory [`PageHost`] for exercising controllers without a browser.
//!
//! Records every storage write, value write and frame request so tests can
//! assert on side effects, not just end state.

use std::collections::HashMap;

use crate::error::HostError;
use crate::host::PageHost;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub text: String,
    pub value: String,
    /// Form control (`<select>`) rather than plain content.
    pub control: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub storage: HashMap<String, String>,
    pub body_attributes: HashMap<String, String>,
    pub body_style: HashMap<String, String>,
    pub elements: HashMap<String, MemoryElement>,
    pub scroll_y: f64,
    /// Simulate `localStorage` being disabled.
    pub storage_unavailable: bool,
    /// Simulate a window that cannot schedule animation frames.
    pub frames_unavailable: bool,
    pub storage_writes: Vec<(String, String)>,
    pub value_writes: Vec<(String, String)>,
    pub frame_requests: usize,
    pub style_writes: usize,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty non-control element with id `id`.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_owned(), MemoryElement::default());
        self
    }

    /// Add a form control with id `id` and an initial value.
    #[must_use]
    pub fn with_control(mut self, id: &str, value: &str) -> Self {
        self.elements.insert(id.to_owned(), MemoryElement { text: String::new(), value: value.to_owned(), control: true });
        self
    }

    /// Seed storage without recording a write.
    #[must_use]
    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        self.storage.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.body_attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, name: &str) -> Option<&str> {
        self.body_style.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }
}

impl PageHost for MemoryHost {
    fn storage_get(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.storage_unavailable {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.storage.get(key).cloned())
    }

    fn storage_set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        if self.storage_unavailable {
            return Err(HostError::StorageUnavailable);
        }
        self.storage.insert(key.to_owned(), value.to_owned());
        self.storage_writes.push((key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.body_attributes.get(name).cloned()
    }

    fn set_body_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.body_attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_body_style_property(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.body_style.insert(name.to_owned(), value.to_owned());
        self.style_writes += 1;
        Ok(())
    }

    fn has_control(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|element| element.control)
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        element.text = text.to_owned();
        true
    }

    fn element_value(&self, id: &str) -> Option<String> {
        self.elements.get(id).filter(|element| element.control).map(|element| element.value.clone())
    }

    fn set_element_value(&mut self, id: &str, value: &str) -> bool {
        let Some(element) = self.elements.get_mut(id).filter(|element| element.control) else {
            return false;
        };
        element.value = value.to_owned();
        self.value_writes.push((id.to_owned(), value.to_owned()));
        true
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn request_frame(&mut self) -> Result<(), HostError> {
        if self.frames_unavailable {
            return Err(HostError::Dom("requestAnimationFrame unavailable".into()));
        }
        self.frame_requests += 1;
        Ok(())
    }
}
