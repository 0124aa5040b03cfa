use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading, serializing, or installing a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    #[error("a theme is already installed for this process")]
    AlreadyInstalled,

    #[error("no plugin registered under {0:?}")]
    UnknownPlugin(String),
}
