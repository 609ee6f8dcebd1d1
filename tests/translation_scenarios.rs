// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end translation scenarios over an in-memory page

use pangaleo_site::carousel::CaptionBinding;
use pangaleo_site::dom::{attr, class, Document, MemoryDocument, NodeId};
use pangaleo_site::i18n::{Dictionary, Lang, StatusState, Translator};
use std::sync::Arc;

fn cta_dictionary() -> Arc<Dictionary> {
    Arc::new(
        Dictionary::new(Lang::En)
            .with_entries(Lang::En, [("cta.button", "Download now")])
            .with_entries(Lang::Sw, [("cta.button", "Pakua sasa")]),
    )
}

fn builtin_engine(initial: Lang) -> Translator<NodeId> {
    Translator::new(Arc::new(Dictionary::builtin()), initial)
}

/// A page exercising every binding flavour and dependent widget.
fn full_page() -> (MemoryDocument, Vec<NodeId>) {
    let mut doc = MemoryDocument::new();
    let nav = doc.create("nav").finish();
    doc.create("a")
        .attr(attr::I18N, "nav.about")
        .text("About")
        .child_of(nav)
        .finish();
    doc.create("a")
        .attr(attr::I18N, "nav.demo")
        .text("Download now")
        .child_of(nav)
        .finish();
    let form = doc.create("form").attr(attr::EMAIL_FORM, "").finish();
    doc.create("input")
        .attr(attr::I18N_PLACEHOLDER, "contact.form.name")
        .child_of(form)
        .finish();
    doc.create("input")
        .attr(attr::I18N_VALUE, "contact.form.button")
        .child_of(form)
        .finish();
    let status = doc
        .create("p")
        .attr(attr::FORM_STATUS, "")
        .child_of(form)
        .finish();
    doc.create("a")
        .attr(attr::WHATSAPP, "+255 712 345 678")
        .attr(attr::HREF, "https://wa.me/")
        .finish();
    let slots: Vec<NodeId> = (0..3)
        .map(|_| doc.create("div").class(class::SLIDER_CAPTION).finish())
        .collect();
    let mut ids = vec![status];
    ids.extend(slots);
    (doc, ids)
}

#[test]
fn test_cta_button_scenario() {
    let mut doc = MemoryDocument::new();
    let buttons: Vec<NodeId> = (0..3)
        .map(|_| {
            doc.create("a")
                .attr(attr::I18N, "cta.button")
                .text("placeholder")
                .finish()
        })
        .collect();

    let mut translator: Translator<NodeId> = Translator::new(cta_dictionary(), Lang::Sw);
    translator.activate(&mut doc, Lang::Sw);
    for button in &buttons {
        assert_eq!(doc.text(button), "Pakua sasa");
    }

    translator.activate(&mut doc, Lang::En);
    for button in &buttons {
        assert_eq!(doc.text(button), "Download now");
    }
}

#[test]
fn test_status_retranslated_without_resubmitting() {
    let mut doc = MemoryDocument::new();
    let status = doc.create("p").attr(attr::FORM_STATUS, "").finish();
    let mut translator = builtin_engine(Lang::Sw);
    translator.activate(&mut doc, Lang::En);

    translator.set_status(&mut doc, &status, "form.status.sending", StatusState::Neutral);
    assert_eq!(doc.text(&status), "Sending...");

    translator.activate(&mut doc, Lang::Sw);
    assert_eq!(doc.text(&status), "Inatumwa...");
    assert!(!doc.has_class(&status, class::SUCCESS));
    assert!(!doc.has_class(&status, class::ERROR));
}

#[test]
fn test_status_on_plain_element_is_retranslated() {
    let mut doc = MemoryDocument::new();
    let banner = doc.create("p").text("").finish();
    let mut translator = builtin_engine(Lang::En);
    translator.activate(&mut doc, Lang::En);

    translator.set_status(&mut doc, &banner, "form.status.success", StatusState::Success);
    assert_eq!(doc.text(&banner), "Message sent. We will reply soon.");

    translator.activate(&mut doc, Lang::Sw);
    assert_eq!(doc.text(&banner), "Ujumbe umetumwa. Tutakujibu hivi karibuni.");
    assert!(doc.has_class(&banner, class::SUCCESS));
}

#[test]
fn test_whatsapp_scenario() {
    let mut doc = MemoryDocument::new();
    let link = doc.create("a").attr(attr::WHATSAPP, "+255 712 345 678").finish();
    let mut translator = builtin_engine(Lang::En);
    translator.activate(&mut doc, Lang::Sw);

    let href = doc.attribute(&link, attr::HREF).expect("href written");
    let greeting = "Habari timu ya PangaLeo, naomba msaada wa kupata nyumba ya kupanga.";
    assert!(href.starts_with("https://wa.me/255712345678?text="));
    assert!(href.ends_with(&*urlencoding::encode(greeting)));
    assert!(!href.contains(' '));
}

#[test]
fn test_carousel_wrap_scenario() {
    let mut doc = MemoryDocument::new();
    let slots: Vec<NodeId> = (0..5).map(|_| doc.create("div").finish()).collect();
    let mut translator = builtin_engine(Lang::Sw);
    translator.attach_carousel(CaptionBinding::new(
        |lang: Lang| match lang {
            Lang::En => vec!["caption 0".to_string(), "caption 1".to_string()],
            Lang::Sw => vec!["maelezo 0".to_string()],
        },
        slots.clone(),
    ));

    translator.activate(&mut doc, Lang::En);
    assert_eq!(doc.text(&slots[3]), "caption 1");
    assert_eq!(doc.text(&slots[0]), "caption 0");

    translator.activate(&mut doc, Lang::Sw);
    for slot in &slots {
        assert_eq!(doc.text(slot), "maelezo 0");
    }
}

#[test]
fn test_activate_is_idempotent() {
    let (mut once, _) = full_page();
    let (mut twice, _) = full_page();
    let mut a = builtin_engine(Lang::Sw);
    let mut b = builtin_engine(Lang::Sw);

    let first = a.activate(&mut once, Lang::En);
    b.activate(&mut twice, Lang::En);
    let second = b.activate(&mut twice, Lang::En);

    assert_eq!(once, twice);
    assert_eq!(first, second);
}

#[test]
fn test_language_round_trip_restores_text() {
    let (mut doc, ids) = full_page();
    let mut translator = builtin_engine(Lang::Sw);
    let status = ids[0];

    translator.activate(&mut doc, Lang::Sw);
    translator.set_status(&mut doc, &status, "form.status.fail", StatusState::Error);
    let first_sw = doc.clone();

    translator.activate(&mut doc, Lang::En);
    assert_ne!(doc, first_sw);
    assert_eq!(doc.text(&status), "Message failed. Please try again.");

    translator.activate(&mut doc, Lang::Sw);
    assert_eq!(doc, first_sw);
}

#[test]
fn test_unknown_language_codes_never_crash() {
    let (mut doc, _) = full_page();
    let mut translator = builtin_engine(Lang::Sw);
    translator.activate(&mut doc, Lang::En);
    let before = doc.clone();

    for code in ["", "fr", "EN", "sw-TZ", "zz", "日本語"] {
        assert!(translator.activate_code(&mut doc, code).is_err());
        assert_eq!(translator.active(), Lang::En);
    }
    assert_eq!(doc, before);
}

#[test]
fn test_missing_targets_shrink_the_workset() {
    let mut doc = MemoryDocument::new();
    let mut translator = builtin_engine(Lang::Sw);
    let report = translator.activate(&mut doc, Lang::En);
    assert_eq!(report.text + report.placeholders + report.values, 0);
    assert_eq!(report.statuses + report.links + report.captions, 0);
    assert_eq!(doc.language().as_deref(), Some("en"));
}
