//! Error types for the RF card game engine
//!
//! Rejected player actions are not errors; see [`crate::game::ActionRejected`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcgError {
    #[error("Card not found in catalog: {0}")]
    CardNotFound(String),

    #[error("Duplicate card name in catalog: {0}")]
    DuplicateCard(String),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    IncompatibleVersion { found: u32, expected: u32 },

    #[error("Save file not found: {}", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Save not found: {0}")]
    SaveNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, CcgError>;
