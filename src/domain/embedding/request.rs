//! Embedding request types

use serde::{Deserialize, Serialize};

/// Request to embed one batch of texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Model to use for embedding
    model: String,
    /// Input texts, in batch order
    input: Vec<String>,
}

impl EmbeddingRequest {
    /// Create a new embedding request
    pub fn new(model: impl Into<String>, input: Vec<String>) -> Self {
        Self {
            model: model.into(),
            input,
        }
    }

    /// Create a request for a single text
    pub fn single(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(model, vec![text.into()])
    }

    /// Get the model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the input texts
    pub fn inputs(&self) -> &[String] {
        &self.input
    }

    /// Get the number of inputs
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}
