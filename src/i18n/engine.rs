// SPDX-License-Identifier: PMPL-1.0-or-later

//! The translation engine: active language, resolution and the re-render pass.

use super::catalog::Lang;
use super::dictionary::Dictionary;
use crate::carousel::CaptionBinding;
use crate::dom::{attr, class, Document};
use crate::error::{SiteError, SiteResult};
use crate::links::{whatsapp_href, GREETING_KEY, WHATSAPP_BASE};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Visual state of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    #[default]
    Neutral,
    Success,
    Error,
}

/// How many nodes each surface of one activation pass touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivationReport {
    pub lang: Lang,
    pub text: usize,
    pub placeholders: usize,
    pub values: usize,
    pub captions: usize,
    pub statuses: usize,
    pub links: usize,
}

/// Owns the active language and pushes it into a [`Document`].
///
/// One instance per page session. Nothing here is global, so tests can run
/// any number of engines side by side over the same dictionary.
pub struct Translator<E> {
    dictionary: Arc<Dictionary>,
    active: Lang,
    whatsapp_base: String,
    carousel: Option<CaptionBinding<E>>,
}

impl<E: Clone> Translator<E> {
    /// An engine showing `initial`. No pass runs until [`activate`](Self::activate).
    pub fn new(dictionary: Arc<Dictionary>, initial: Lang) -> Self {
        Self {
            dictionary,
            active: initial,
            whatsapp_base: WHATSAPP_BASE.to_string(),
            carousel: None,
        }
    }

    pub fn with_whatsapp_base(mut self, base: impl Into<String>) -> Self {
        self.whatsapp_base = base.into();
        self
    }

    pub fn active(&self) -> Lang {
        self.active
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Active language, then the fallback language, then `""`.
    pub fn resolve(&self, key: &str) -> &str {
        self.dictionary.resolve(self.active, key)
    }

    /// Lets the carousel's captions follow language changes.
    pub fn attach_carousel(&mut self, binding: CaptionBinding<E>) {
        self.carousel = Some(binding);
    }

    /// Stops driving the carousel, e.g. when its widget is torn down.
    pub fn detach_carousel(&mut self) -> Option<CaptionBinding<E>> {
        self.carousel.take()
    }

    /// Switches to `lang` and re-renders every bound surface of `doc`.
    pub fn activate<D>(&mut self, doc: &mut D, lang: Lang) -> ActivationReport
    where
        D: Document<Element = E>,
    {
        doc.set_language(lang.code());
        self.active = lang;

        let report = ActivationReport {
            lang,
            text: self.apply_text(doc),
            placeholders: self.apply_attribute(doc, attr::I18N_PLACEHOLDER, attr::PLACEHOLDER),
            values: self.apply_attribute(doc, attr::I18N_VALUE, attr::VALUE),
            captions: self.apply_captions(doc),
            statuses: self.refresh_statuses(doc),
            links: self.refresh_whatsapp_links(doc),
        };
        debug!(?report, "translation pass complete");
        report
    }

    /// [`activate`](Self::activate) for a raw code from a selector or store.
    ///
    /// An unsupported code leaves the active language and the page untouched.
    pub fn activate_code<D>(&mut self, doc: &mut D, code: &str) -> SiteResult<ActivationReport>
    where
        D: Document<Element = E>,
    {
        match Lang::from_code(code) {
            Some(lang) => Ok(self.activate(doc, lang)),
            None => {
                warn!(code, active = %self.active, "ignoring unsupported language");
                Err(SiteError::UnsupportedLanguage(code.to_string()))
            }
        }
    }

    /// Shows `key` on a status line and remembers it for later passes.
    pub fn set_status<D>(&self, doc: &mut D, target: &E, key: &str, state: StatusState)
    where
        D: Document<Element = E>,
    {
        doc.set_attribute(target, attr::STATUS_KEY, key);
        doc.set_text(target, self.resolve(key));
        doc.remove_class(target, class::SUCCESS);
        doc.remove_class(target, class::ERROR);
        match state {
            StatusState::Success => doc.add_class(target, class::SUCCESS),
            StatusState::Error => doc.add_class(target, class::ERROR),
            StatusState::Neutral => {}
        }
    }

    fn apply_text<D>(&self, doc: &mut D) -> usize
    where
        D: Document<Element = E>,
    {
        let mut updated = 0;
        for element in doc.query_all(attr::I18N) {
            let Some(key) = doc.attribute(&element, attr::I18N) else {
                continue;
            };
            let text = self.resolve(&key);
            if !text.is_empty() {
                doc.set_text(&element, text);
                updated += 1;
            }
        }
        updated
    }

    fn apply_attribute<D>(&self, doc: &mut D, marker: &str, target: &str) -> usize
    where
        D: Document<Element = E>,
    {
        let mut updated = 0;
        for element in doc.query_all(marker) {
            let Some(key) = doc.attribute(&element, marker) else {
                continue;
            };
            let text = self.resolve(&key);
            if !text.is_empty() {
                doc.set_attribute(&element, target, text);
                updated += 1;
            }
        }
        updated
    }

    fn apply_captions<D>(&self, doc: &mut D) -> usize
    where
        D: Document<Element = E>,
    {
        let Some(binding) = &self.carousel else {
            return 0;
        };
        let captions = binding.hook.captions_for(self.active);
        if captions.is_empty() {
            return 0;
        }
        // The carousel owns its slot count; fewer captions repeat in order.
        for (index, slot) in binding.slots.iter().enumerate() {
            doc.set_text(slot, &captions[index % captions.len()]);
        }
        binding.slots.len()
    }

    fn refresh_statuses<D>(&self, doc: &mut D) -> usize
    where
        D: Document<Element = E>,
    {
        let mut updated = 0;
        for status in doc.query_all(attr::STATUS_KEY) {
            let Some(key) = doc.attribute(&status, attr::STATUS_KEY) else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            doc.set_text(&status, self.resolve(&key));
            updated += 1;
        }
        updated
    }

    fn refresh_whatsapp_links<D>(&self, doc: &mut D) -> usize
    where
        D: Document<Element = E>,
    {
        let greeting = self.resolve(GREETING_KEY);
        let mut updated = 0;
        for link in doc.query_all(attr::WHATSAPP) {
            let raw = doc.attribute(&link, attr::WHATSAPP).unwrap_or_default();
            if let Some(href) = whatsapp_href(&self.whatsapp_base, &raw, greeting) {
                doc.set_attribute(&link, attr::HREF, &href);
                updated += 1;
            }
        }
        updated
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for Translator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("active", &self.active)
            .field("whatsapp_base", &self.whatsapp_base)
            .field("carousel", &self.carousel)
            .finish_non_exhaustive()
    }
}
