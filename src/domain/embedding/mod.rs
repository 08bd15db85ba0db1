//! Embedding provider domain models and traits

mod models;
mod provider;
mod request;
mod response;
mod similarity;

pub use models::{
    dimensions_for, known_dimensions, DEFAULT_DIMENSIONS, DEFAULT_EMBEDDING_MODEL,
    EMBEDDING_MODELS,
};
pub use provider::EmbeddingProvider;
pub use request::EmbeddingRequest;
pub use response::{Embedding, EmbeddingResponse, EmbeddingUsage, Vector};
pub use similarity::cosine_similarity;

#[cfg(test)]
pub use provider::mock::{mock_vector, MockEmbeddingProvider};
