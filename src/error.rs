// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the site behaviour layer.
//!
//! None of these are fatal to a page session: callers log them and carry on
//! with the default language, an untouched node, or a translated error banner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A language code outside the supported set was requested.
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),

    /// The preference store could not be read or written.
    #[error("preference store failure: {0}")]
    Preferences(String),

    /// Site configuration could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(String),

    /// The host document rejected an operation.
    #[error("document operation failed: {0}")]
    Document(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
