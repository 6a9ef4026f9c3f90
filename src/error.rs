use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TercoError {
    #[error("open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode terminal theme: {0}")]
    Serialize(#[source] serde_json::Error),
}
