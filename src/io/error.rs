//! Error types and context management for codec and catalogue operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all codec and catalogue operations
#[derive(Debug)]
pub enum LifecatError {
    /// Pattern object cannot be turned into a board
    ///
    /// Occurs when:
    /// - `boardArraySize` is below 1 or above the allocation limit
    /// - A live cell lies outside the bounds implied by `boardArraySize`
    MalformedPattern {
        /// Description of what's wrong with the pattern
        reason: String,
    },

    /// Submitted package failed the structural shape check
    InvalidPackage {
        /// Description of the rejection
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No catalogue entry carries the requested id
    PatternNotFound {
        /// The requested pattern id
        pattern_id: u64,
    },

    /// Remove request made by someone other than the submitting user
    NotOwner {
        /// The targeted pattern id
        pattern_id: u64,
        /// Username presented with the request
        username: String,
    },

    /// Catalogue document exists but cannot be parsed
    CatalogueCorrupt {
        /// Path of the catalogue document
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Json {
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Failed to save a rendered pattern to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for LifecatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPattern { reason } => {
                write!(f, "Malformed pattern: {reason}")
            }
            Self::InvalidPackage { reason } => {
                write!(f, "Invalid pattern package: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PatternNotFound { pattern_id } => {
                write!(f, "Pattern {pattern_id} could not be found in the catalogue")
            }
            Self::NotOwner {
                pattern_id,
                username,
            } => {
                write!(f, "Pattern {pattern_id} is not owned by '{username}'")
            }
            Self::CatalogueCorrupt { path, source } => {
                write!(
                    f,
                    "Catalogue '{}' could not be parsed: {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Json { source } => {
                write!(f, "JSON error: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LifecatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogueCorrupt { source, .. } | Self::Json { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, LifecatError>;

/// Attaches the path and operation to file system failures
pub trait WithPath<T> {
    /// Convert an I/O failure into [`LifecatError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| LifecatError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for LifecatError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for LifecatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LifecatError {
    LifecatError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed pattern error
pub fn malformed_pattern(reason: &impl ToString) -> LifecatError {
    LifecatError::MalformedPattern {
        reason: reason.to_string(),
    }
}
