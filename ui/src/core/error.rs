//! Error types shared across the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("no browser {0} available")]
    MissingGlobal(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T, E = PageError> = std::result::Result<T, E>;
