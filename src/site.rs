// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page session: startup sequence and language selector wiring.
//!
//! [`Site::boot`] is what the page runs once before it becomes interactive:
//! pick the language (stored choice, else the configured default), mount
//! the carousel, run one full translation pass and highlight the matching
//! `[data-lang]` control. Selector clicks then go through
//! [`Site::select_language`].

use crate::carousel::{self, MountOptions, MountedCarousel, Transition};
use crate::config::SiteConfig;
use crate::dom::{attr, class, Document};
use crate::error::SiteResult;
use crate::form::{ContactForms, SubmitDecision, SubmitOutcome, SubmitTicket};
use crate::i18n::{lang_from_locale, ActivationReport, Dictionary, Lang, Translator};
use crate::storage::{load_language, save_language, PreferenceStore};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// Host facts gathered before boot.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// `navigator.language`, when known. Logged only; it never picks the
    /// initial language.
    pub browser_locale: Option<String>,
    /// `prefers-reduced-motion: reduce`.
    pub reduced_motion: bool,
}

/// Every behaviour bound to one document.
pub struct Site<D: Document, S> {
    pub doc: D,
    pub store: S,
    config: SiteConfig,
    translator: Translator<D::Element>,
    carousel: Option<MountedCarousel<D::Element>>,
    forms: ContactForms<D::Element>,
}

impl<D, S> Site<D, S>
where
    D: Document,
    S: PreferenceStore,
{
    /// Runs the startup sequence over `doc`.
    pub fn boot<R>(
        mut doc: D,
        store: S,
        dictionary: Arc<Dictionary>,
        config: SiteConfig,
        env: &Environment,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        if let Some(locale) = env.browser_locale.as_deref() {
            debug!(locale, detected = ?lang_from_locale(locale), "browser locale");
        }
        let stored = load_language(&store, &config.storage_key);
        let initial = stored.unwrap_or(config.default_language);
        info!(lang = %initial, from_store = stored.is_some(), "initial language");

        let mut translator = Translator::new(dictionary, initial)
            .with_whatsapp_base(config.whatsapp_base.clone());

        let options = MountOptions {
            asset_dir: config.slider_asset_dir.clone(),
            reduced_motion: env.reduced_motion,
        };
        let carousel = carousel::mount(&mut doc, rng, &options);
        if let Some(mounted) = &carousel {
            translator.attach_carousel(mounted.caption_binding());
        }
        let forms = ContactForms::discover(&doc);

        let mut site = Self {
            doc,
            store,
            config,
            translator,
            carousel,
            forms,
        };
        site.translator.activate(&mut site.doc, initial);
        site.mark_selector(initial);
        site
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator<D::Element> {
        &self.translator
    }

    pub fn carousel(&self) -> Option<&MountedCarousel<D::Element>> {
        self.carousel.as_ref()
    }

    pub fn forms(&self) -> &ContactForms<D::Element> {
        &self.forms
    }

    pub fn active_language(&self) -> Lang {
        self.translator.active()
    }

    /// A click on a `[data-lang]` control carrying `code`.
    ///
    /// Unsupported codes change nothing and are not persisted.
    pub fn select_language(&mut self, code: &str) -> SiteResult<ActivationReport> {
        let report = self.translator.activate_code(&mut self.doc, code)?;
        save_language(&mut self.store, &self.config.storage_key, report.lang);
        self.mark_selector(report.lang);
        Ok(report)
    }

    /// Shows `lang` without recording it as the visitor's choice.
    pub fn show(&mut self, lang: Lang) -> ActivationReport {
        let report = self.translator.activate(&mut self.doc, lang);
        self.mark_selector(lang);
        report
    }

    /// Re-runs the translation pass without changing language, e.g. after
    /// the host inserted new tagged elements.
    pub fn refresh(&mut self) -> ActivationReport {
        let lang = self.translator.active();
        self.translator.activate(&mut self.doc, lang)
    }

    /// One carousel interval tick.
    pub fn tick_carousel(&mut self) -> Option<Transition> {
        self.carousel.as_mut()?.tick(&mut self.doc)
    }

    pub fn begin_submit(&mut self, form: usize, relay_available: bool) -> SubmitDecision {
        self.forms
            .begin_submit(&mut self.doc, &self.translator, form, relay_available)
    }

    pub fn finish_submit(&mut self, ticket: SubmitTicket, outcome: SubmitOutcome) {
        self.forms
            .finish_submit(&mut self.doc, &self.translator, ticket, outcome);
    }

    /// Stops the carousel and detaches it from the translator.
    pub fn teardown(&mut self) {
        if let Some(mounted) = self.carousel.as_mut() {
            mounted.rotation.stop();
        }
        self.translator.detach_carousel();
    }

    pub fn into_parts(self) -> (D, S) {
        (self.doc, self.store)
    }

    fn mark_selector(&mut self, lang: Lang) {
        for button in self.doc.query_all(attr::LANG) {
            let matches = self.doc.attribute(&button, attr::LANG).as_deref() == Some(lang.code());
            self.doc.toggle_class(&button, class::ACTIVE, matches);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, NodeId};
    use crate::storage::{MemoryStore, LANGUAGE_KEY};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Ids {
        en_button: NodeId,
        sw_button: NodeId,
        heading: NodeId,
    }

    fn page() -> (MemoryDocument, Ids) {
        let mut doc = MemoryDocument::new();
        let en_button = doc.create("button").attr(attr::LANG, "en").text("EN").finish();
        let sw_button = doc.create("button").attr(attr::LANG, "sw").text("SW").finish();
        let heading = doc
            .create("h1")
            .attr(attr::I18N, "hero.title")
            .text("Find the right rental faster, without the usual stress.")
            .finish();
        (
            doc,
            Ids {
                en_button,
                sw_button,
                heading,
            },
        )
    }

    fn boot(doc: MemoryDocument, store: MemoryStore) -> Site<MemoryDocument, MemoryStore> {
        let env = Environment {
            browser_locale: Some("en-US".into()),
            reduced_motion: false,
        };
        Site::boot(
            doc,
            store,
            Arc::new(Dictionary::builtin()),
            SiteConfig::default(),
            &env,
            &mut StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn first_visit_is_swahili_despite_english_browser() {
        let (doc, ids) = page();
        let site = boot(doc, MemoryStore::new());
        assert_eq!(site.active_language(), Lang::Sw);
        assert_eq!(site.doc.language().as_deref(), Some("sw"));
        assert_eq!(
            site.doc.text(&ids.heading),
            "Tafuta nyumba ya kupanga haraka, bila usumbufu wa kawaida."
        );
        assert!(site.doc.has_class(&ids.sw_button, class::ACTIVE));
        assert!(!site.doc.has_class(&ids.en_button, class::ACTIVE));
    }

    #[test]
    fn stored_choice_wins() {
        let (doc, ids) = page();
        let site = boot(doc, MemoryStore::new().with_value(LANGUAGE_KEY, "en"));
        assert_eq!(site.active_language(), Lang::En);
        assert!(site.doc.has_class(&ids.en_button, class::ACTIVE));
    }

    #[test]
    fn garbage_in_store_falls_back_to_default() {
        let (doc, _) = page();
        let site = boot(doc, MemoryStore::new().with_value(LANGUAGE_KEY, "klingon"));
        assert_eq!(site.active_language(), Lang::Sw);
    }

    #[test]
    fn selecting_persists_and_moves_highlight() {
        let (doc, ids) = page();
        let mut site = boot(doc, MemoryStore::new());
        site.select_language("en").expect("supported");
        assert_eq!(
            site.doc.text(&ids.heading),
            "Find the right rental faster, without the usual stress."
        );
        assert!(site.doc.has_class(&ids.en_button, class::ACTIVE));
        assert!(!site.doc.has_class(&ids.sw_button, class::ACTIVE));
        let (_, store) = site.into_parts();
        assert_eq!(load_language(&store, LANGUAGE_KEY), Some(Lang::En));
    }

    #[test]
    fn unsupported_selection_is_not_persisted() {
        let (doc, ids) = page();
        let mut site = boot(doc, MemoryStore::new());
        assert!(site.select_language("de").is_err());
        assert_eq!(site.active_language(), Lang::Sw);
        assert!(site.doc.has_class(&ids.sw_button, class::ACTIVE));
        let (_, store) = site.into_parts();
        assert_eq!(store.load(LANGUAGE_KEY).expect("memory store"), None);
    }

    #[test]
    fn refresh_picks_up_new_elements() {
        let (doc, _) = page();
        let mut site = boot(doc, MemoryStore::new());
        let late = site.doc.create("span").attr(attr::I18N, "nav.menu").finish();
        assert_eq!(site.doc.text(&late), "");
        site.refresh();
        assert_eq!(site.doc.text(&late), "Menyu");
    }

    #[test]
    fn teardown_stops_carousel() {
        let (mut doc, _) = page();
        let slider = doc
            .create("div")
            .attr(attr::SLIDER, "")
            .attr(attr::SLIDER_IMAGES, "a.jpg,b.jpg")
            .attr(attr::SLIDER_CAPTIONS_EN, "One|Two")
            .attr(attr::SLIDER_CAPTIONS_SW, "Moja|Mbili")
            .finish();
        doc.create("div").attr(attr::SLIDER_TRACK, "").child_of(slider).finish();
        let mut site = boot(doc, MemoryStore::new());
        assert!(site.tick_carousel().is_some());
        site.teardown();
        assert!(site.tick_carousel().is_none());
    }
}
