// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the PangaLeo site.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name | Role                      |
//! |------|----------|-------------|---------------------------|
//! | sw   | Swahili  | Kiswahili   | first-visit default       |
//! | en   | English  | English     | fallback, holds every key |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.about"`, `"form.status.success"`.
//! Lookups fall back to English when a key is missing in the active language.
//! If the key is missing in English too, the empty string is returned and
//! callers leave whatever the page already shows (fail-open, never panics).
//!
//! The [`Translator`] is the only owner of the active language. A language
//! change is one synchronous pass over the page: the `<html lang>`
//! attribute, every `data-i18n*` binding, the carousel captions, any status
//! line that remembers its key, and the WhatsApp links.

mod catalog;
mod dictionary;
mod engine;
mod locale;

pub use catalog::{Lang, DEFAULT_LANG, FALLBACK_LANG};
pub use dictionary::{Dictionary, LanguageCoverage};
pub use engine::{ActivationReport, StatusState, Translator};
pub use locale::{lang_from_locale, language_name, native_name, primary_subtag};
