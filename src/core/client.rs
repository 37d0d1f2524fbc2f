//! Translation client: thin adapter over a [`TranslationProvider`]

use std::sync::Arc;
use tracing::{debug, info};

use crate::core::errors::Result;
use crate::core::google::GoogleTranslateProvider;
use crate::core::models::{languages_from_table, LanguageEntry};
use crate::core::provider::TranslationProvider;

/// Stateless translation client.
///
/// Holds no per-request data, so one instance is shared across all handlers.
/// Every call is a single provider round trip: no retry, no cache.
#[derive(Clone)]
pub struct TranslationClient {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationClient {
    /// Create a client over any provider
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Create a Google-backed client from environment
    pub fn from_env() -> Result<Self> {
        let provider = GoogleTranslateProvider::from_env()?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Translate `text`; provider errors are returned unchanged
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        debug!("Forwarding {} chars from {} to {}", text.len(), source_lang, target_lang);
        self.provider.translate(text, source_lang, target_lang).await
    }

    /// Fetch the provider's language table, sorted by name with unique codes
    pub async fn list_languages(&self) -> Result<Vec<LanguageEntry>> {
        let table = self.provider.supported_languages().await?;
        let languages = languages_from_table(table);
        info!("Fetched {} languages", languages.len());
        Ok(languages)
    }
}

impl std::fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClient").finish_non_exhaustive()
    }
}
