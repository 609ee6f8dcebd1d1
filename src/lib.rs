// SPDX-License-Identifier: PMPL-1.0-or-later

//! PangaLeo site: client-side behaviour layer for the PangaLeo marketing pages.
//!
//! The pages are static HTML that opt into behaviour through `data-*`
//! attributes. This crate supplies that behaviour, in the browser through
//! `wasm-bindgen` and offline through the `pangaleo` CLI.
//!
//! BUILDING BLOCKS:
//! 1. **i18n**: English/Swahili dictionary and the [`i18n::Translator`],
//!    which owns the active language and re-renders every bound node.
//! 2. **dom**: the [`dom::Document`] binding surface and an in-memory page.
//! 3. **carousel**, **form**, **links**: widgets whose text follows the
//!    active language.
//! 4. **site**: the startup sequence tying the above to a preference store.

pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod i18n;
pub mod links;
pub mod site;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{SiteError, SiteResult};
