//! Run-length encoded Life patterns composed from images
//!
//! The crate converts two-state cell grids to and from the RLE text format
//! used by cellular-automaton tools, and composes grids by tiling a base
//! pattern either uniformly or wherever a stencil grid is alive.

#![forbid(unsafe_code)]

/// Input/output operations, command-line pipeline and error handling
pub mod io;
/// RLE header parsing, pattern decoding and encoding
pub mod rle;
/// Cell grid model and tiling
pub mod spatial;

pub use io::error::{PatternError, Result};
