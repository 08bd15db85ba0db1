//! Embedding service - batched, order-preserving text embedding

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::{EmbeddingSettings, HttpConfig};
use crate::domain::{DomainError, EmbeddingProvider, EmbeddingRequest, ProviderError, Vector};
use crate::infrastructure::embedding::EmbeddingProviderFactory;

/// Maximum number of texts sent in one provider request
pub const MAX_BATCH_SIZE: usize = 100;

/// Embedding client: splits input into batches, calls the provider once per
/// batch in order, and reassembles the vectors in input order.
#[derive(Debug, Clone)]
pub struct EmbeddingService {
    settings: EmbeddingSettings,
    provider: Option<Arc<dyn EmbeddingProvider>>,
}

impl EmbeddingService {
    /// Create a service over an explicit provider.
    ///
    /// The provider is ignored when `settings` has no credential, so every
    /// embedding call fails with `NotConfigured`.
    pub fn new(settings: EmbeddingSettings, provider: Arc<dyn EmbeddingProvider>) -> Self {
        let provider = settings.enabled().then_some(provider);
        Self { settings, provider }
    }

    /// Create a service using the HTTP provider built from `settings`
    pub fn from_settings(settings: EmbeddingSettings) -> Result<Self, DomainError> {
        Self::from_settings_with_http(settings, &HttpConfig::default())
    }

    /// Create a service using the HTTP provider with explicit transport settings
    pub fn from_settings_with_http(
        settings: EmbeddingSettings,
        http: &HttpConfig,
    ) -> Result<Self, DomainError> {
        let provider = EmbeddingProviderFactory::create_with_timeout(&settings, http.timeout())?;
        Ok(Self { settings, provider })
    }

    /// Create a service from the process-wide settings
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_settings(EmbeddingSettings::global().clone())
    }

    /// Embed `texts`, returning one vector per text in the same order.
    ///
    /// Fails on the first failing batch; no partial result is returned.
    #[instrument(skip(self, texts), fields(model = %self.settings.model(), count = texts.len()))]
    pub async fn embed(&self, texts: &[String]) -> Result<Vec<Vector>, DomainError> {
        let provider = self.provider.as_ref().ok_or(DomainError::NotConfigured)?;

        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut vectors = Vec::with_capacity(texts.len());

        for (batch_number, batch) in texts.chunks(MAX_BATCH_SIZE).enumerate() {
            let offset = batch_number * MAX_BATCH_SIZE;
            debug!(offset, size = batch.len(), "Embedding batch");

            let request = EmbeddingRequest::new(self.settings.model(), batch.to_vec());

            let batch_vectors = provider
                .embed(request)
                .await
                .and_then(|response| response.into_ordered_vectors(batch.len()))
                .map_err(|e| {
                    warn!(
                        offset,
                        provider = provider.provider_name(),
                        error = %e,
                        "Embedding batch failed"
                    );
                    DomainError::provider(offset, e)
                })?;

            vectors.extend(batch_vectors);
        }

        debug!(count = vectors.len(), "Embedding complete");
        Ok(vectors)
    }

    /// Embed a single text
    pub async fn embed_single(&self, text: &str) -> Result<Vector, DomainError> {
        let mut vectors = self.embed(&[text.to_string()]).await?;
        vectors.pop().ok_or_else(|| {
            DomainError::provider(0, ProviderError::invalid_response("no embedding returned"))
        })
    }

    /// True iff a credential was resolved
    pub fn is_enabled(&self) -> bool {
        self.settings.enabled()
    }

    /// The configured model identifier
    pub fn model_name(&self) -> &str {
        self.settings.model()
    }

    /// Advisory output dimensions of the configured model
    pub fn dimensions(&self) -> usize {
        self.settings.dimensions()
    }

    pub fn settings(&self) -> &EmbeddingSettings {
        &self.settings
    }
}
