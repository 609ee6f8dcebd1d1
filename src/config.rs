// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration.
//!
//! Every field has a default matching the production site, so an empty
//! JSON object (or no file at all) is a valid configuration.

use crate::carousel::{DEFAULT_ASSET_DIR, ROTATION_INTERVAL_MS};
use crate::error::{SiteError, SiteResult};
use crate::i18n::{Lang, DEFAULT_LANG};
use crate::links::WHATSAPP_BASE;
use crate::storage::LANGUAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Preference store key holding the chosen language.
    pub storage_key: String,
    /// Language for visitors with no stored choice.
    pub default_language: Lang,
    /// Click-to-chat endpoint the contact number is appended to.
    pub whatsapp_base: String,
    /// Folder for slider images given by bare file name.
    pub slider_asset_dir: String,
    pub rotation_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: LANGUAGE_KEY.to_string(),
            default_language: DEFAULT_LANG,
            whatsapp_base: WHATSAPP_BASE.to_string(),
            slider_asset_dir: DEFAULT_ASSET_DIR.to_string(),
            rotation_interval_ms: ROTATION_INTERVAL_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, or returns the defaults when it does not exist.
    pub fn load(path: &Path) -> SiteResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| SiteError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    fn validate(&self) -> SiteResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::Config("storage_key must not be empty".into()));
        }
        if !self.whatsapp_base.starts_with("https://") && !self.whatsapp_base.starts_with("http://")
        {
            return Err(SiteError::Config(format!(
                "whatsapp_base must be an http(s) URL, got {:?}",
                self.whatsapp_base
            )));
        }
        if self.rotation_interval_ms == 0 {
            return Err(SiteError::Config("rotation_interval_ms must be positive".into()));
        }
        Ok(())
    }
}
