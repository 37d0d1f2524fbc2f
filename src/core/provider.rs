//! Port to the external translation service

use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::errors::Result;

/// Capability the relay needs from a translation backend.
///
/// Implementations report failures as [`TranslationError`](crate::core::errors::TranslationError)
/// and never retry; the caller sees the first failure.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source_lang` (may be `auto`) into `target_lang`.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;

    /// Supported languages as a display name -> code table.
    async fn supported_languages(&self) -> Result<HashMap<String, String>>;
}
