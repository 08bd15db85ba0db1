//! Embedding credential, endpoint and model resolution

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fmt;

use crate::domain::{dimensions_for, DomainError, DEFAULT_EMBEDDING_MODEL};

/// Endpoint used with `OPENAI_API_KEY` unless `OPENAI_BASE_URL` overrides it
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed endpoint used with `OPENROUTER_API_KEY`
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

static GLOBAL_SETTINGS: Lazy<EmbeddingSettings> = Lazy::new(EmbeddingSettings::from_env);

/// Raw embedding settings as read from the environment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmbeddingEnv {
    pub openai_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub embedding_model: Option<String>,
}

impl EmbeddingEnv {
    /// Load from process environment variables, after reading `.env` if present
    pub fn load() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: config::Config) -> Result<Self, DomainError> {
        Ok(config.try_deserialize()?)
    }
}

/// Which credential the embedding client authenticates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialSource {
    /// `OPENAI_API_KEY`, preferred when present
    OpenAi,
    /// `OPENROUTER_API_KEY`
    OpenRouter,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::OpenAi => "openai",
            CredentialSource::OpenRouter => "openrouter",
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved API key and where it came from
#[derive(Clone, PartialEq, Eq)]
pub struct EmbeddingCredential {
    source: CredentialSource,
    api_key: String,
}

impl EmbeddingCredential {
    pub fn new(source: CredentialSource, api_key: impl Into<String>) -> Self {
        Self {
            source,
            api_key: api_key.into(),
        }
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for EmbeddingCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingCredential")
            .field("source", &self.source)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

/// Immutable embedding configuration, resolved once and shared read-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingSettings {
    credential: Option<EmbeddingCredential>,
    base_url: String,
    model: String,
}

impl EmbeddingSettings {
    /// Resolve credential, endpoint and model from raw settings.
    ///
    /// Never fails. Without any credential the settings are disabled and a
    /// warning is logged; embedding calls fail later with `NotConfigured`.
    pub fn resolve(env: EmbeddingEnv) -> Self {
        let openai_key = non_blank(env.openai_api_key);
        let openrouter_key = non_blank(env.openrouter_api_key);
        let base_url_override = non_blank(env.openai_base_url);

        let model =
            non_blank(env.embedding_model).unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());

        let (credential, base_url) = match (openai_key, openrouter_key) {
            (Some(key), _) => (
                Some(EmbeddingCredential::new(CredentialSource::OpenAi, key)),
                base_url_override.unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            ),
            (None, Some(key)) => (
                Some(EmbeddingCredential::new(CredentialSource::OpenRouter, key)),
                OPENROUTER_BASE_URL.to_string(),
            ),
            (None, None) => {
                tracing::warn!(
                    "No embedding credential found (OPENAI_API_KEY or OPENROUTER_API_KEY); embeddings are disabled"
                );
                (
                    None,
                    base_url_override.unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                )
            }
        };

        let settings = Self {
            credential,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        };

        if let Some(credential) = &settings.credential {
            tracing::info!(
                source = %credential.source(),
                base_url = %settings.base_url,
                model = %settings.model,
                "Embedding settings resolved"
            );
        }

        settings
    }

    /// Load the environment and resolve it.
    ///
    /// An unreadable environment is logged and treated as empty, leaving the
    /// settings disabled.
    pub fn from_env() -> Self {
        let env = EmbeddingEnv::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load embedding environment: {}", e);
            EmbeddingEnv::default()
        });

        Self::resolve(env)
    }

    /// Process-wide settings, resolved from the environment on first use
    pub fn global() -> &'static EmbeddingSettings {
        &GLOBAL_SETTINGS
    }

    pub fn credential(&self) -> Option<&EmbeddingCredential> {
        self.credential.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// True iff a credential was resolved
    pub fn enabled(&self) -> bool {
        self.credential.is_some()
    }

    /// Advisory output dimensions for the configured model
    pub fn dimensions(&self) -> usize {
        dimensions_for(&self.model)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
