//! Load-time errors. Queries over a built graph never fail.

use std::path::PathBuf;

/// Errors raised while obtaining or parsing a graph document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read graph document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse graph document: {0}")]
    Parse(#[from] serde_json::Error),
}
