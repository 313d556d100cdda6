use thiserror::Error;

/// Errors raised while loading or validating the store registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read store registry at {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store registry: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),

    #[error("invalid store registry: {0}")]
    Validation(String),
}

/// Errors raised while loading one store's feed snapshot.
///
/// Per-record field problems never surface here — they degrade locally
/// inside `RawListing` deserialization. Only an unreadable file or a
/// fundamentally wrong document shape (non-array) is an error.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed for store '{store}' at {path}: {source}")]
    Io {
        store: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed feed for store '{store}': {source}")]
    Parse {
        store: String,
        #[source]
        source: serde_json::Error,
    },
}
