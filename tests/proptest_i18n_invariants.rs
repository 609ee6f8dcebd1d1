// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for the translation engine
//!
//! 1. Resolution never panics and only yields "" for keys unknown everywhere
//! 2. Every built-in key resolves to non-empty text in every language
//! 3. Only "en" and "sw" parse as language codes
//! 4. Unsupported codes leave the engine and page untouched
//! 5. Captions are assigned to slots by index modulo caption count
//! 6. WhatsApp hrefs carry digits only and no raw whitespace
//! 7. Locale parsing never panics

use pangaleo_site::carousel::CaptionBinding;
use pangaleo_site::dom::{attr, Document, MemoryDocument, NodeId};
use pangaleo_site::i18n::{lang_from_locale, primary_subtag, Dictionary, Lang, Translator};
use pangaleo_site::links::{whatsapp_href, WHATSAPP_BASE};
use proptest::prelude::*;
use std::sync::Arc;

fn any_lang() -> impl Strategy<Value = Lang> {
    prop_oneof![Just(Lang::En), Just(Lang::Sw)]
}

fn tagged_page(keys: &[String]) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    for key in keys {
        doc.create("span")
            .attr(attr::I18N, key)
            .text("static")
            .finish();
    }
    doc
}

proptest! {
    #[test]
    fn resolve_never_panics(key in ".{0,40}", lang in any_lang()) {
        let dictionary = Dictionary::builtin();
        let text = dictionary.resolve(lang, &key);
        let known = dictionary.lookup(Lang::En, &key).is_some()
            || dictionary.lookup(lang, &key).is_some();
        prop_assert_eq!(text.is_empty(), !known);
    }

    #[test]
    fn builtin_keys_resolve_everywhere(lang in any_lang(), pick in any::<prop::sample::Index>()) {
        let dictionary = Dictionary::builtin();
        let keys = dictionary.keys(Lang::En);
        let key = keys[pick.index(keys.len())];
        prop_assert!(!dictionary.resolve(lang, key).is_empty(), "{} empty in {}", key, lang);
    }

    #[test]
    fn only_supported_codes_parse(code in "\\PC{0,8}") {
        let parsed = Lang::from_code(&code);
        prop_assert_eq!(parsed.is_some(), code == "en" || code == "sw");
    }

    #[test]
    fn unsupported_codes_change_nothing(
        code in "[a-zA-Z-]{0,6}".prop_filter("supported", |c| c != "en" && c != "sw"),
        start in any_lang(),
    ) {
        let keys = vec!["nav.about".to_string(), "hero.title".to_string()];
        let mut doc = tagged_page(&keys);
        let mut translator: Translator<NodeId> =
            Translator::new(Arc::new(Dictionary::builtin()), start);
        translator.activate(&mut doc, start);
        let before = doc.clone();

        prop_assert!(translator.activate_code(&mut doc, &code).is_err());
        prop_assert_eq!(translator.active(), start);
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn captions_wrap_by_index(captions in 1usize..6, slots in 0usize..12, lang in any_lang()) {
        let mut doc = MemoryDocument::new();
        let ids: Vec<NodeId> = (0..slots).map(|_| doc.create("div").finish()).collect();
        let texts: Vec<String> = (0..captions).map(|i| format!("caption {}", i)).collect();
        let hook_texts = texts.clone();
        let mut translator: Translator<NodeId> =
            Translator::new(Arc::new(Dictionary::builtin()), lang);
        translator.attach_carousel(CaptionBinding::new(
            move |_: Lang| hook_texts.clone(),
            ids.clone(),
        ));

        let report = translator.activate(&mut doc, lang);
        prop_assert_eq!(report.captions, slots);
        for (index, id) in ids.iter().enumerate() {
            prop_assert_eq!(doc.text(id), texts[index % captions].clone());
        }
    }

    #[test]
    fn whatsapp_href_is_clean(raw in "\\PC{0,24}", greeting in "\\PC{0,40}") {
        if let Some(href) = whatsapp_href(WHATSAPP_BASE, &raw, &greeting) {
            let rest = &href[WHATSAPP_BASE.len()..];
            let number = rest.split('?').next().unwrap_or_default();
            prop_assert!(!number.is_empty());
            prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(!href.chars().any(char::is_whitespace));
            prop_assert_eq!(href.contains("?text="), !greeting.is_empty());
        } else {
            prop_assert!(!raw.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn locale_parsing_never_panics(tag in "\\PC{0,16}") {
        let subtag = primary_subtag(&tag);
        if let Some(lang) = lang_from_locale(&tag) {
            prop_assert_eq!(subtag.as_deref(), Some(lang.code()));
        }
    }
}
