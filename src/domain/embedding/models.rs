//! Known embedding models and their output dimensions

/// Model used when none is configured
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Dimensions reported for models missing from [`EMBEDDING_MODELS`]
pub const DEFAULT_DIMENSIONS: usize = 1536;

/// Known embedding models and their dimensions.
///
/// Advisory only: responses are never checked against this table.
pub const EMBEDDING_MODELS: &[(&str, usize)] = &[
    ("text-embedding-3-small", 1536),
    ("text-embedding-3-large", 3072),
    ("text-embedding-ada-002", 1536),
    ("openai/text-embedding-3-small", 1536),
    ("openai/text-embedding-3-large", 3072),
    ("openai/text-embedding-ada-002", 1536),
];

/// Look up the dimensions of a known model
pub fn known_dimensions(model: &str) -> Option<usize> {
    EMBEDDING_MODELS
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, dims)| *dims)
}

/// Dimensions for `model`, falling back to [`DEFAULT_DIMENSIONS`]
pub fn dimensions_for(model: &str) -> usize {
    known_dimensions(model).unwrap_or(DEFAULT_DIMENSIONS)
}
