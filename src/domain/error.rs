use thiserror::Error;

/// Errors raised by the remote embedding capability for a single request
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {message}")]
    Request { message: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ProviderError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Embeddings are not configured: set OPENAI_API_KEY or OPENROUTER_API_KEY")]
    NotConfigured,

    #[error("Provider error for batch starting at offset {offset}: {source}")]
    Provider {
        offset: usize,
        #[source]
        source: ProviderError,
    },

    #[error("Dimension mismatch: vectors have lengths {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn provider(offset: usize, source: ProviderError) -> Self {
        Self::Provider { offset, source }
    }

    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}
