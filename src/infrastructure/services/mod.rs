//! Application services

mod embedding_service;

pub use embedding_service::{EmbeddingService, MAX_BATCH_SIZE};
