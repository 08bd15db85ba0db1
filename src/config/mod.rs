//! Configuration: ambient application settings and embedding resolution

mod app_config;
mod embedding;

pub use app_config::{AppConfig, HttpConfig, LogFormat, LoggingConfig};
pub use embedding::{
    CredentialSource, EmbeddingCredential, EmbeddingEnv, EmbeddingSettings,
    DEFAULT_OPENAI_BASE_URL, OPENROUTER_BASE_URL,
};
