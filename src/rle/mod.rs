//! Run-length encoded pattern format
//!
//! This module contains the codec for the RLE text format:
//! - Header recognition
//! - Pattern text decoding and encoding
//! - Document assembly

/// Pattern text to grid
pub mod decode;
/// Document assembly and whole-document parsing
pub mod document;
/// Grid to canonical pattern text
pub mod encode;
/// Header line recognition and field splitting
pub mod header;

pub use decode::{DecodeMode, decode, decode_with};
pub use document::{assemble_document, parse_document, parse_document_with};
pub use encode::encode;
pub use header::{Header, parse_fields, parse_header};
