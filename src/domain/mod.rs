//! Domain layer - Core embedding types, errors and vector math

pub mod embedding;
pub mod error;

pub use embedding::{
    cosine_similarity, dimensions_for, Embedding, EmbeddingProvider, EmbeddingRequest,
    EmbeddingResponse, EmbeddingUsage, Vector, DEFAULT_DIMENSIONS, DEFAULT_EMBEDDING_MODEL,
};
pub use error::{DomainError, ProviderError};
