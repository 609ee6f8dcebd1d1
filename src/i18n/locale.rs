// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tag helpers and display names for the language selector.
//!
//! Reference: <https://www.rfc-editor.org/rfc/rfc5646> (language tags) and
//! <https://www.loc.gov/standards/iso639-2/php/code_list.php>.

use super::catalog::Lang;

/// Extracts the lowercase primary language subtag of a BCP 47 tag.
///
/// Browsers report tags such as `sw-TZ` or `en_GB`; only the part before
/// the first `-` or `_` identifies the language. Returns `None` when the
/// primary subtag is not two or three ASCII letters.
///
/// # Examples
/// ```
/// use pangaleo_site::i18n::primary_subtag;
/// assert_eq!(primary_subtag("sw-TZ").as_deref(), Some("sw"));
/// assert_eq!(primary_subtag("EN_gb").as_deref(), Some("en"));
/// assert_eq!(primary_subtag("").as_deref(), None);
/// ```
pub fn primary_subtag(tag: &str) -> Option<String> {
    let primary = tag.trim().split(['-', '_']).next()?;
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

/// Maps a browser locale tag onto a supported language, if any.
pub fn lang_from_locale(tag: &str) -> Option<Lang> {
    primary_subtag(tag).and_then(|code| Lang::from_code(&code))
}

/// English name of a supported language.
pub fn language_name(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "English",
        Lang::Sw => "Swahili",
    }
}

/// Name of a supported language written in that language, as shown on the
/// selector buttons.
pub fn native_name(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "English",
        Lang::Sw => "Kiswahili",
    }
}
