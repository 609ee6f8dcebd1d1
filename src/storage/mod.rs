// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistence for the visitor's language choice.
//!
//! The site stores exactly one value: the selected language code under
//! [`LANGUAGE_KEY`]. Browsers keep it in `localStorage`; the CLI keeps it in
//! a small JSON file. Any read or write failure degrades to "no stored
//! preference" so the page still renders in the default language.

use crate::error::{SiteError, SiteResult};
use crate::i18n::Lang;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage key of the language preference.
pub const LANGUAGE_KEY: &str = "pangaleo-lang";

/// A string key-value store scoped to the site.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> SiteResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> SiteResult<()> {
        (**self).save(key, value)
    }
}

/// Store living only for the current process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let payload = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, payload)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        self.read_all()
            .map(|mut values| values.remove(key))
            .map_err(|e| SiteError::Preferences(format!("{:#}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> SiteResult<()> {
        let result = self.read_all().and_then(|mut values| {
            values.insert(key.to_string(), value.to_string());
            self.write_all(&values)
        });
        result.map_err(|e| SiteError::Preferences(format!("{:#}", e)))
    }
}

/// Stored language, if the store is readable and names a supported one.
pub fn load_language<S>(store: &S, key: &str) -> Option<Lang>
where
    S: PreferenceStore + ?Sized,
{
    match store.load(key) {
        Ok(Some(code)) => {
            let lang = Lang::from_code(&code);
            if lang.is_none() {
                debug!(code = %code, "stored language is not supported");
            }
            lang
        }
        Ok(None) => None,
        Err(err) => {
            warn!(%err, "could not read language preference");
            None
        }
    }
}

/// Records the visitor's choice; returns whether it was persisted.
pub fn save_language<S>(store: &mut S, key: &str, lang: Lang) -> bool
where
    S: PreferenceStore + ?Sized,
{
    match store.save(key, lang.code()) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, lang = %lang, "could not persist language preference");
            false
        }
    }
}
