use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a maze or reading run configuration.
///
/// Rejected moves and unsolvable mazes are ordinary traversal results and
/// never show up here.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cell code {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },

    #[error("maze contains no cells")]
    Empty,

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
