// SPDX-License-Identifier: PMPL-1.0-or-later

//! Browser implementations of [`Document`] and [`PreferenceStore`].

use crate::dom::Document;
use crate::error::{SiteError, SiteResult};
use crate::storage::PreferenceStore;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn console_warn(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(warn) = Reflect::get(&console, &"warn".into()) else {
        return;
    };
    let Ok(warn_fn) = warn.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = warn_fn.call1(&console, &JsValue::from_str(msg));
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        console_warn(&format!("pangaleo: {} failed: {:?}", what, err));
    }
}

fn selector(attr: &str) -> String {
    format!("[{}]", attr)
}

fn elements(list: Result<web_sys::NodeList, JsValue>) -> Vec<web_sys::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// The live page.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Document for WebDocument {
    type Element = web_sys::Element;

    fn set_language(&mut self, code: &str) {
        if let Some(root) = self.document.document_element() {
            report(root.set_attribute("lang", code), "setting <html lang>");
        }
    }

    fn language(&self) -> Option<String> {
        self.document.document_element()?.get_attribute("lang")
    }

    fn query_all(&self, attr: &str) -> Vec<web_sys::Element> {
        elements(self.document.query_selector_all(&selector(attr)))
    }

    fn query_within(&self, root: &web_sys::Element, attr: &str) -> Vec<web_sys::Element> {
        elements(root.query_selector_all(&selector(attr)))
    }

    fn attribute(&self, element: &web_sys::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &web_sys::Element, name: &str, value: &str) {
        report(element.set_attribute(name, value), "setAttribute");
    }

    fn text(&self, element: &web_sys::Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, element: &web_sys::Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn has_class(&self, element: &web_sys::Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &web_sys::Element, class: &str) {
        report(element.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&mut self, element: &web_sys::Element, class: &str) {
        report(element.class_list().remove_1(class), "classList.remove");
    }

    fn append_element(&mut self, parent: &web_sys::Element, tag: &str) -> Option<web_sys::Element> {
        let child = self.document.create_element(tag).ok()?;
        parent.append_child(&child).ok()?;
        Some(child)
    }

    fn reset_form(&mut self, form: &web_sys::Element) {
        if let Some(form) = form.dyn_ref::<web_sys::HtmlFormElement>() {
            form.reset();
        }
    }
}

/// `window.localStorage`, which may be missing (privacy modes, sandboxed
/// frames); a missing store behaves as an always-failing one.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn from_window(window: &web_sys::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> SiteResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| SiteError::Preferences("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::Preferences(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::Preferences(format!("{:?}", e)))
    }
}
