use thiserror::Error;

/// Errors surfaced by the profile cache and store.
#[derive(Debug, Error)]
pub enum SocialError {
    /// Caller-validation failure: the generator is never invoked for an
    /// empty or whitespace-only username.
    #[error("username must be non-empty")]
    EmptyUsername,

    /// An unrecognized platform label from user input.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// The profile store file could not be read or written.
    #[error("failed to access profile store {path}: {source}")]
    StoreIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The profile store file is not valid JSON of the expected shape.
    #[error("failed to decode profile store: {0}")]
    StoreDecode(#[from] serde_json::Error),
}
