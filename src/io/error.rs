//! Error types for pattern parsing, stencil loading and file output

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all pattern operations
///
/// Only header parsing, strict decoding and the file-facing pipeline can fail.
/// Lenient decoding and tiling are total and never produce one of these.
#[derive(Debug)]
pub enum PatternError {
    /// No `x = <int>` width declaration anywhere in the document
    MissingHeader,

    /// A width declaration exists but the full header could not be assembled
    InvalidHeader {
        /// Description of what is missing or malformed
        reason: String,
    },

    /// Strict decoding met a character outside the RLE alphabet
    UnrecognizedSymbol {
        /// The offending character
        symbol: char,
        /// Byte offset of the character within the pattern text
        offset: usize,
    },

    /// Input data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
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

    /// Failed to load a stencil image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
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
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => {
                write!(f, "RLE document is missing the 'x = ...' header line")
            }
            Self::InvalidHeader { reason } => {
                write!(f, "Could not find a valid RLE header line: {reason}")
            }
            Self::UnrecognizedSymbol { symbol, offset } => {
                write!(f, "Unrecognized RLE symbol {symbol:?} at offset {offset}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Attaches the path and operation to a bare I/O failure
pub trait WithPath<T> {
    /// Convert an I/O result into a [`PatternError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped with the path and operation
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PatternError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid header error
pub fn invalid_header(reason: &impl ToString) -> PatternError {
    PatternError::InvalidHeader {
        reason: reason.to_string(),
    }
}
