//! PMP Embeddings
//!
//! A small client for remote text-embedding APIs:
//! - Credential, endpoint and model resolution (OpenAI first, OpenRouter second)
//! - Batched, order-preserving embedding of text lists
//! - Per-model dimension lookup
//! - Cosine similarity between vectors

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{AppConfig, CredentialSource, EmbeddingEnv, EmbeddingSettings};
pub use domain::{cosine_similarity, DomainError, EmbeddingProvider, ProviderError, Vector};
pub use infrastructure::{init_logging, EmbeddingService, MAX_BATCH_SIZE};
