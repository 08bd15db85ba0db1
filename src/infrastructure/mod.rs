//! Infrastructure layer - HTTP transport, providers, services and logging

pub mod embedding;
pub mod http_client;
pub mod logging;
pub mod services;

pub use embedding::{EmbeddingProviderFactory, OpenAiEmbeddingProvider};
pub use http_client::{HttpClient, HttpClientTrait};
pub use logging::init_logging;
pub use services::{EmbeddingService, MAX_BATCH_SIZE};

#[cfg(test)]
pub use http_client::mock::{MockHttpClient, RecordedRequest};
