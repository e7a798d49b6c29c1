//! CLI error types.

use fts_config::ConfigError;
use fts_extract::ExtractError;
use fts_store::StoreError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
