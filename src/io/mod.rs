//! Input, output and the ambient concerns around them
//!
//! This module contains IO-related functionality including:
//! - The command-line batch pipeline
//! - Defaults and limits
//! - Crate error types
//! - Image loading into stencil grids
//! - Batch progress reporting

/// Command-line interface and batch processing
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image brightness sampling
pub mod image;
/// Batch progress bar
pub mod progress;
