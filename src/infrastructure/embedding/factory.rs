use std::sync::Arc;
use std::time::Duration;

use super::OpenAiEmbeddingProvider;
use crate::config::{CredentialSource, EmbeddingSettings, HttpConfig};
use crate::domain::{DomainError, EmbeddingProvider};
use crate::infrastructure::{HttpClient, HttpClientTrait};

/// Attribution headers sent to OpenRouter
pub const OPENROUTER_REFERER: &str = "http://localhost";
pub const OPENROUTER_TITLE: &str = env!("CARGO_PKG_NAME");

/// Factory for creating embedding providers from resolved settings
#[derive(Debug)]
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create the provider for `settings` with the default transport timeout.
    ///
    /// Returns `Ok(None)` when no credential was resolved.
    pub fn create(
        settings: &EmbeddingSettings,
    ) -> Result<Option<Arc<dyn EmbeddingProvider>>, DomainError> {
        Self::create_with_timeout(settings, HttpConfig::default().timeout())
    }

    /// Create the provider for `settings` with a request timeout
    pub fn create_with_timeout(
        settings: &EmbeddingSettings,
        timeout: Duration,
    ) -> Result<Option<Arc<dyn EmbeddingProvider>>, DomainError> {
        let http_client = HttpClient::with_timeout(timeout)
            .map_err(|e| DomainError::configuration(e.to_string()))?;

        Ok(Self::create_with_client(settings, http_client)
            .map(|provider| Arc::new(provider) as Arc<dyn EmbeddingProvider>))
    }

    /// Create the provider over an arbitrary HTTP client
    pub fn create_with_client<C: HttpClientTrait>(
        settings: &EmbeddingSettings,
        http_client: C,
    ) -> Option<OpenAiEmbeddingProvider<C>> {
        let credential = settings.credential()?;

        let provider = OpenAiEmbeddingProvider::with_base_url(
            http_client,
            credential.api_key(),
            settings.base_url(),
        )
        .with_name(credential.source().as_str());

        let provider = match credential.source() {
            CredentialSource::OpenAi => provider,
            CredentialSource::OpenRouter => provider
                .with_header("HTTP-Referer", OPENROUTER_REFERER)
                .with_header("X-Title", OPENROUTER_TITLE),
        };

        Some(provider)
    }
}
