//! Embedding response types

use serde::{Deserialize, Serialize};

use crate::domain::ProviderError;

/// An embedding vector
pub type Vector = Vec<f64>;

/// A single embedding tagged with its position in the request batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// Index of this embedding in the batch
    index: usize,
    /// The embedding vector
    embedding: Vector,
}

impl Embedding {
    /// Create a new embedding
    pub fn new(index: usize, embedding: Vector) -> Self {
        Self { index, embedding }
    }

    /// Get the index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the embedding vector
    pub fn vector(&self) -> &[f64] {
        &self.embedding
    }

    /// Get the embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }

    /// Consume and return the vector
    pub fn into_vector(self) -> Vector {
        self.embedding
    }
}

/// Usage statistics for embedding request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    /// Number of prompt tokens
    prompt_tokens: u32,
    /// Total tokens used
    total_tokens: u32,
}

impl EmbeddingUsage {
    /// Create new usage stats
    pub fn new(prompt_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            total_tokens,
        }
    }

    /// Get prompt tokens
    pub fn prompt_tokens(&self) -> u32 {
        self.prompt_tokens
    }

    /// Get total tokens
    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
    }
}

/// Response from an embedding request.
///
/// The provider does not guarantee that `data` is in index order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Model used
    model: String,
    /// Generated embeddings, in provider order
    data: Vec<Embedding>,
    /// Usage statistics, when the provider reports them
    usage: Option<EmbeddingUsage>,
}

impl EmbeddingResponse {
    /// Create a new embedding response
    pub fn new(model: String, data: Vec<Embedding>, usage: Option<EmbeddingUsage>) -> Self {
        Self { model, data, usage }
    }

    /// Get the model used
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get all embeddings in provider order
    pub fn embeddings(&self) -> &[Embedding] {
        &self.data
    }

    /// Get usage statistics
    pub fn usage(&self) -> Option<&EmbeddingUsage> {
        self.usage.as_ref()
    }

    /// Consume the response and return the vectors sorted by batch index.
    ///
    /// Fails unless the indices are exactly `0..expected`.
    pub fn into_ordered_vectors(self, expected: usize) -> Result<Vec<Vector>, ProviderError> {
        if self.data.len() != expected {
            return Err(ProviderError::invalid_response(format!(
                "expected {} embeddings, got {}",
                expected,
                self.data.len()
            )));
        }

        let mut data = self.data;
        data.sort_by_key(Embedding::index);

        data.into_iter()
            .enumerate()
            .map(|(position, item)| {
                if item.index != position {
                    return Err(ProviderError::invalid_response(format!(
                        "missing or duplicate embedding index near {}",
                        position
                    )));
                }
                Ok(item.embedding)
            })
            .collect()
    }
}
