// SPDX-License-Identifier: PMPL-1.0-or-later

//! Immutable (language, key) → text mapping with single-step fallback.

use super::catalog::{builtin_table, Lang, FALLBACK_LANG};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

type Table = HashMap<Cow<'static, str>, Cow<'static, str>>;

/// Translation tables for every supported language.
///
/// Built once at startup and never mutated afterwards; a [`Translator`]
/// holds it behind an `Arc` so independent engines can share one copy.
///
/// [`Translator`]: super::Translator
#[derive(Debug, Clone)]
pub struct Dictionary {
    fallback: Lang,
    tables: HashMap<Lang, Table>,
}

/// Per-language gaps against the fallback language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCoverage {
    pub lang: Lang,
    pub total: usize,
    /// Fallback keys this language does not translate.
    pub missing: Vec<String>,
    /// Keys this language carries that the fallback language lacks.
    pub orphans: Vec<String>,
}

impl LanguageCoverage {
    pub fn percent(&self, fallback_total: usize) -> f64 {
        if fallback_total == 0 {
            return 100.0;
        }
        let translated = fallback_total.saturating_sub(self.missing.len());
        translated as f64 * 100.0 / fallback_total as f64
    }
}

impl Dictionary {
    /// An empty dictionary falling back to `fallback`.
    pub fn new(fallback: Lang) -> Self {
        Self {
            fallback,
            tables: HashMap::new(),
        }
    }

    /// The compiled-in site catalog.
    pub fn builtin() -> Self {
        let mut dictionary = Self::new(FALLBACK_LANG);
        for &lang in Lang::all() {
            let table = builtin_table(lang)
                .iter()
                .map(|&(k, v)| (Cow::Borrowed(k), Cow::Borrowed(v)))
                .collect();
            dictionary.tables.insert(lang, table);
        }
        dictionary
    }

    /// Adds (or extends) the table for `lang`. Later entries win.
    pub fn with_entries<I, K, V>(mut self, lang: Lang, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        let table = self.tables.entry(lang).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
        self
    }

    pub fn fallback(&self) -> Lang {
        self.fallback
    }

    /// Whether a table exists for `lang`.
    pub fn supports(&self, lang: Lang) -> bool {
        self.tables.contains_key(&lang)
    }

    /// Direct lookup in one table. Empty strings count as absent.
    pub fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|table| table.get(key))
            .map(|value| &**value)
            .filter(|value| !value.is_empty())
    }

    /// `lang`, then the fallback language, then `""`.
    pub fn resolve(&self, lang: Lang, key: &str) -> &str {
        self.lookup(lang, key)
            .or_else(|| self.lookup(self.fallback, key))
            .unwrap_or("")
    }

    /// Keys of one table, sorted.
    pub fn keys(&self, lang: Lang) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&lang)
            .map(|table| table.keys().map(|k| &**k).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Coverage of every non-fallback language against the fallback table.
    pub fn coverage(&self) -> Vec<LanguageCoverage> {
        let reference: BTreeSet<&str> = self.keys(self.fallback).into_iter().collect();
        let mut report = Vec::new();
        for &lang in Lang::all() {
            if lang == self.fallback {
                continue;
            }
            let present: BTreeSet<&str> = self
                .keys(lang)
                .into_iter()
                .filter(|key| self.lookup(lang, key).is_some())
                .collect();
            report.push(LanguageCoverage {
                lang,
                total: present.len(),
                missing: reference.difference(&present).map(|k| k.to_string()).collect(),
                orphans: present.difference(&reference).map(|k| k.to_string()).collect(),
            });
        }
        report
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
