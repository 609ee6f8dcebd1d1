// SPDX-License-Identifier: PMPL-1.0-or-later

//! `wasm-bindgen` exports for the browser.
//!
//! Host-driven: the page script owns event listeners and timers and calls
//! into [`SiteRuntime`]. A minimal host looks like:
//!
//! ```text
//! const site = new SiteRuntime();
//! document.querySelectorAll('[data-lang]').forEach((button) =>
//!   button.addEventListener('click', () => site.selectLanguage(button.dataset.lang)));
//! const timer = setInterval(() => site.tickCarousel(), site.rotationIntervalMs());
//! ```
//!
//! Only compiled on `wasm32` targets.

mod document;

pub use document::{LocalStore, WebDocument};

use crate::config::SiteConfig;
use crate::form::{SubmitDecision, SubmitFailure, SubmitTicket};
use crate::i18n::Dictionary;
use crate::site::{Environment, Site};
use document::console_warn;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Permission to send one contact form, handed to the page script.
#[wasm_bindgen]
pub struct FormTicket {
    inner: SubmitTicket,
}

#[wasm_bindgen]
impl FormTicket {
    #[wasm_bindgen(getter, js_name = serviceId)]
    pub fn service_id(&self) -> String {
        self.inner.relay.service_id.clone()
    }

    #[wasm_bindgen(getter, js_name = templateId)]
    pub fn template_id(&self) -> String {
        self.inner.relay.template_id.clone()
    }

    /// Public key to initialise the relay client with, on the first send only.
    #[wasm_bindgen(getter, js_name = initializeWith)]
    pub fn initialize_with(&self) -> Option<String> {
        self.inner.initialize_with.clone()
    }
}

/// The whole behaviour layer bound to `window.document`.
#[wasm_bindgen]
pub struct SiteRuntime {
    site: Site<WebDocument, LocalStore>,
}

#[wasm_bindgen]
impl SiteRuntime {
    /// Runs the startup sequence. Call once, before the page is interactive.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SiteRuntime, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let env = Environment {
            browser_locale: window.navigator().language(),
            reduced_motion: window
                .match_media(REDUCED_MOTION_QUERY)
                .ok()
                .flatten()
                .is_some_and(|query| query.matches()),
        };
        let site = Site::boot(
            WebDocument::new(document),
            LocalStore::from_window(&window),
            Arc::new(Dictionary::builtin()),
            SiteConfig::default(),
            &env,
            &mut rand::thread_rng(),
        );
        Ok(SiteRuntime { site })
    }

    /// Handles a language selector click. Returns `false` for unsupported codes.
    #[wasm_bindgen(js_name = selectLanguage)]
    pub fn select_language(&mut self, code: &str) -> bool {
        match self.site.select_language(code) {
            Ok(_) => true,
            Err(err) => {
                console_warn(&format!("pangaleo: {}", err));
                false
            }
        }
    }

    /// Code of the active language.
    #[wasm_bindgen(js_name = activeLanguage)]
    pub fn active_language(&self) -> String {
        self.site.active_language().code().to_string()
    }

    /// Re-translates the page, e.g. after inserting tagged markup.
    pub fn refresh(&mut self) {
        self.site.refresh();
    }

    /// One carousel interval tick. Returns `false` once rotation is idle.
    #[wasm_bindgen(js_name = tickCarousel)]
    pub fn tick_carousel(&mut self) -> bool {
        self.site.tick_carousel().is_some()
    }

    #[wasm_bindgen(js_name = rotationIntervalMs)]
    pub fn rotation_interval_ms(&self) -> u32 {
        self.site.config().rotation_interval_ms
    }

    /// Click-through target of the carousel, if the page declares one.
    #[wasm_bindgen(js_name = carouselLink)]
    pub fn carousel_link(&self) -> Option<String> {
        self.site.carousel().and_then(|carousel| carousel.link.clone())
    }

    /// Submit event on the `index`-th `[data-email-form]`.
    ///
    /// Returns a ticket when the host should send; `undefined` when the
    /// form is unconfigured (status already shown) or already sending.
    #[wasm_bindgen(js_name = beginSubmit)]
    pub fn begin_submit(&mut self, index: usize, relay_available: bool) -> Option<FormTicket> {
        match self.site.begin_submit(index, relay_available) {
            SubmitDecision::Send(inner) => Some(FormTicket { inner }),
            SubmitDecision::NotConfigured | SubmitDecision::InFlight => None,
        }
    }

    /// Completion of the relay call; `error` is `undefined` on success.
    #[wasm_bindgen(js_name = finishSubmit)]
    pub fn finish_submit(&mut self, ticket: FormTicket, error: Option<String>) {
        let outcome = match error {
            None => Ok(()),
            Some(reason) => Err(SubmitFailure::new(reason)),
        };
        self.site.finish_submit(ticket.inner, outcome);
    }

    /// Stops the carousel; the host clears its interval too.
    pub fn teardown(&mut self) {
        self.site.teardown();
    }
}
