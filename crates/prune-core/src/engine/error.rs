use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::poscar::PoscarError;
use crate::core::models::poscar::DeletionError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read structure from '{path}': {source}", path = path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: PoscarError,
    },

    #[error("Cannot delete atoms from '{path}': {source}", path = path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: DeletionError,
    },

    #[error("Failed to write structure to '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PoscarError,
    },

    #[error("I/O error while scanning '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
