use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Error listing {}: {reason}", path.display())]
    ArchiveList { path: PathBuf, reason: String },

    #[error("Error extracting {}: {reason}", path.display())]
    Extract { path: PathBuf, reason: String },

    #[error("Unsupported archive format: {}", .0.display())]
    UnsupportedArchive(PathBuf),
}
