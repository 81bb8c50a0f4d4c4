//! Error type for the load/transform/save boundary.
use std::path::{Path, PathBuf};

/// Reasons why a recolor run may fail.
///
/// Both kinds are terminal: there is no retry and no partial-success mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// The input path does not exist or is not a decodable image.
    DecodeFailure { path: PathBuf, reason: String },
    /// The output path could not be written (permissions, bad path, disk).
    EncodeFailure { path: PathBuf, reason: String },
}

impl ImageError {
    pub(crate) fn decode(path: &Path, reason: impl Into<String>) -> Self {
        Self::DecodeFailure {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn encode(path: &Path, reason: impl Into<String>) -> Self {
        Self::EncodeFailure {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::DecodeFailure { path, reason } => {
                write!(f, "failed to decode {}: {reason}", path.display())
            }
            ImageError::EncodeFailure { path, reason } => {
                write!(f, "failed to encode {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ImageError {}
