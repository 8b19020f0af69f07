use thiserror::Error;

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors produced while loading the seed catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read from disk.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid YAML of the expected shape.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The catalog parsed but violated an invariant (duplicate or empty ids).
    #[error("catalog validation failed: {0}")]
    Validation(String),
}
