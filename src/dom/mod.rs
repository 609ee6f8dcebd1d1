// SPDX-License-Identifier: PMPL-1.0-or-later

//! The document surface the behaviour layer binds to.
//!
//! Pages opt into behaviour through `data-*` marker attributes; everything
//! in this crate finds its targets by querying for those markers on each
//! pass instead of keeping a registry, so elements added between passes are
//! picked up by the next one.
//!
//! Two implementations exist: [`MemoryDocument`], an arena used by tests and
//! the CLI, and the browser document in `web` (wasm32 only).

mod memory;

pub use memory::{ElementBuilder, MemoryDocument, NodeId};

/// Marker attributes of the binding surface.
pub mod attr {
    /// Text content binding: value is a translation key.
    pub const I18N: &str = "data-i18n";
    /// `placeholder` attribute binding.
    pub const I18N_PLACEHOLDER: &str = "data-i18n-placeholder";
    /// `value` attribute binding.
    pub const I18N_VALUE: &str = "data-i18n-value";
    /// Language selector control; value is a language code.
    pub const LANG: &str = "data-lang";
    /// Contact form status line.
    pub const FORM_STATUS: &str = "data-form-status";
    /// Key the status line is currently displaying.
    pub const STATUS_KEY: &str = "data-status-key";
    /// Raw WhatsApp contact number, formatted any way.
    pub const WHATSAPP: &str = "data-whatsapp";
    pub const SLIDER: &str = "data-slider";
    pub const SLIDER_TRACK: &str = "data-slider-track";
    pub const SLIDER_IMAGES: &str = "data-slider-images";
    pub const SLIDER_CAPTIONS_EN: &str = "data-slider-captions-en";
    pub const SLIDER_CAPTIONS_SW: &str = "data-slider-captions-sw";
    pub const SLIDER_LINK: &str = "data-slider-link";
    pub const EMAIL_FORM: &str = "data-email-form";
    pub const EMAILJS_SERVICE: &str = "data-emailjs-service";
    pub const EMAILJS_TEMPLATE: &str = "data-emailjs-template";
    pub const EMAILJS_PUBLIC: &str = "data-emailjs-public";

    pub const PLACEHOLDER: &str = "placeholder";
    pub const VALUE: &str = "value";
    pub const HREF: &str = "href";
    pub const SRC: &str = "src";
    pub const ALT: &str = "alt";
    pub const LOADING: &str = "loading";
}

/// Visual state classes toggled by the behaviour layer.
pub mod class {
    pub const ACTIVE: &str = "is-active";
    pub const SUCCESS: &str = "is-success";
    pub const ERROR: &str = "is-error";
    pub const SLIDER_IMAGE: &str = "slider-image";
    pub const SLIDER_CAPTION: &str = "slider-caption";
}

/// A mutable page the behaviour layer can query and update.
///
/// Queries return elements in document order. Setters never fail from the
/// caller's point of view: a host that rejects a write logs it and leaves
/// the element as it was.
pub trait Document {
    /// Handle to one element. Cheap to clone; never owns the element.
    type Element: Clone;

    /// Sets the root element's `lang` attribute.
    fn set_language(&mut self, code: &str);

    /// Current root `lang` attribute, if any.
    fn language(&self) -> Option<String>;

    /// Every element carrying `attr`, in document order.
    fn query_all(&self, attr: &str) -> Vec<Self::Element>;

    /// Descendants of `root` carrying `attr`, in document order.
    fn query_within(&self, root: &Self::Element, attr: &str) -> Vec<Self::Element>;

    /// First element carrying `attr`.
    fn query_first(&self, attr: &str) -> Option<Self::Element> {
        self.query_all(attr).into_iter().next()
    }

    /// First descendant of `root` carrying `attr`.
    fn query_first_within(&self, root: &Self::Element, attr: &str) -> Option<Self::Element> {
        self.query_within(root, attr).into_iter().next()
    }

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    fn text(&self, element: &Self::Element) -> String;

    fn set_text(&mut self, element: &Self::Element, text: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&mut self, element: &Self::Element, class: &str);

    fn remove_class(&mut self, element: &Self::Element, class: &str);

    fn toggle_class(&mut self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Creates a `tag` element as the last child of `parent`.
    fn append_element(&mut self, parent: &Self::Element, tag: &str) -> Option<Self::Element>;

    /// Restores the editable fields inside `form` to their initial state.
    fn reset_form(&mut self, form: &Self::Element);
}
