//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::ProviderError;

/// Remote capability that embeds one batch of texts (OpenAI, OpenRouter, etc.)
///
/// Implementations return one [`Embedding`](super::Embedding) per input,
/// tagged with its batch-local index, in any order.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate embeddings for the given batch
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
