//! Browser bindings: `web-sys` host and DOM event wiring.
//!
//! ARCHITECTURE
//! ============
//! `mount` builds one `PageController<BrowserHost>` behind `Rc<RefCell<_>>`.
//! Listener closures hold a strong reference and live for the page; the
//! animation frame callback holds a `Weak` one and is dropped after it fires.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Event, HtmlElement, HtmlSelectElement, Window};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::HostError;
use crate::host::PageHost;
use crate::page::{PageController, dom_is_ready};

type SharedPage = Rc<RefCell<PageController<BrowserHost>>>;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub struct BrowserHost {
    window: Window,
    document: Document,
    frame_target: Weak<RefCell<PageController<BrowserHost>>>,
}

impl BrowserHost {
    fn body(&self) -> Result<HtmlElement, HostError> {
        self.document.body().ok_or_else(|| HostError::Dom("document has no body".into()))
    }

    fn storage(&self) -> Result<web_sys::Storage, HostError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(HostError::StorageUnavailable),
            Err(err) => Err(HostError::Storage(describe(&err))),
        }
    }

    fn select(&self, id: &str) -> Option<HtmlSelectElement> {
        self.document.get_element_by_id(id)?.dyn_ref::<HtmlSelectElement>().cloned()
    }
}

impl PageHost for BrowserHost {
    fn storage_get(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?.get_item(key).map_err(|err| HostError::Storage(describe(&err)))
    }

    fn storage_set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?.set_item(key, value).map_err(|err| HostError::Storage(describe(&err)))
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.document.body()?.get_attribute(name)
    }

    fn set_body_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.body()?.set_attribute(name, value).map_err(|err| HostError::Dom(describe(&err)))
    }

    fn set_body_style_property(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.body()?.style().set_property(name, value).map_err(|err| HostError::Dom(describe(&err)))
    }

    fn has_control(&self, id: &str) -> bool {
        self.select(id).is_some()
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        element.set_text_content(Some(text));
        true
    }

    fn element_value(&self, id: &str) -> Option<String> {
        self.select(id).map(|select| select.value())
    }

    fn set_element_value(&mut self, id: &str, value: &str) -> bool {
        // Assigning `.value` does not dispatch `change`.
        let Some(select) = self.select(id) else {
            return false;
        };
        select.set_value(value);
        true
    }

    fn scroll_y(&self) -> f64 {
        self.window
            .scroll_y()
            .or_else(|_| self.window.page_y_offset())
            .unwrap_or(0.0)
    }

    fn request_frame(&mut self) -> Result<(), HostError> {
        let target = Weak::clone(&self.frame_target);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(page) = target.upgrade() {
                page.borrow_mut().run_frame();
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|err| HostError::Dom(describe(&err)))?;
        *holder.borrow_mut() = Some(cb);
        Ok(())
    }
}

/// Module entry point. Installs logging and mounts once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("site-prefs: logger init failed: {err}").into());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if dom_is_ready(&document.ready_state()) {
        mount(window, document);
        return Ok(());
    }

    let doc = document.clone();
    let on_ready = Closure::once(move || mount(window, doc));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
        &options,
    )?;
    on_ready.forget();
    Ok(())
}

/// Read the JSON override element, falling back to defaults when absent or invalid.
fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            PageConfig::default()
        }
    }
}

fn mount(window: Window, document: Document) {
    let config = load_config(&document);
    let page: SharedPage = Rc::new_cyclic(|weak| {
        let host = BrowserHost { window: window.clone(), document: document.clone(), frame_target: Weak::clone(weak) };
        RefCell::new(PageController::new(host, config))
    });
    page.borrow_mut().initialize();

    if let Err(err) = wire_theme_toggle(&page, &document) {
        log::warn!("theme toggle not wired: {}", describe(&err));
    }
    if let Err(err) = wire_font_select(&page, &document) {
        log::warn!("font selector not wired: {}", describe(&err));
    }
    if let Err(err) = wire_scroll(&page, &window) {
        log::warn!("scroll listener not wired: {}", describe(&err));
    }
}

fn wire_theme_toggle(page: &SharedPage, document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(&page.borrow().config().theme_toggle_id) else {
        return Ok(());
    };
    let page = Rc::clone(page);
    let cb = Closure::wrap(Box::new(move || {
        page.borrow_mut().toggle_theme();
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn wire_font_select(page: &SharedPage, document: &Document) -> Result<(), JsValue> {
    let Some(select) = document.get_element_by_id(&page.borrow().config().font_select_id) else {
        return Ok(());
    };
    let page = Rc::clone(page);
    let cb = Closure::wrap(Box::new(move |event: Event| {
        let Some(value) = event.target().and_then(|t| t.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value))
        else {
            return;
        };
        page.borrow_mut().select_font(&value);
    }) as Box<dyn FnMut(Event)>);
    select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn wire_scroll(page: &SharedPage, window: &Window) -> Result<(), JsValue> {
    let page = Rc::clone(page);
    let cb = Closure::wrap(Box::new(move || {
        page.borrow_mut().on_scroll();
    }) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}
