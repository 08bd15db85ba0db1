//! Embedding provider implementations

mod factory;
mod openai;

pub use factory::{EmbeddingProviderFactory, OPENROUTER_REFERER, OPENROUTER_TITLE};
pub use openai::OpenAiEmbeddingProvider;
