//! Whole-document assembly and parsing

use crate::io::error::Result;
use crate::rle::decode::{DecodeMode, decode_with};
use crate::rle::encode::encode;
use crate::rle::header::{Header, parse_header};
use crate::spatial::grid::Grid;

/// Render a complete RLE document for `grid` under `rule`
///
/// Dimensions in the header are taken from the grid; the rule is written
/// verbatim.
pub fn assemble_document(grid: &Grid, rule: &str) -> String {
    format!(
        "x = {}, y = {}, rule = {rule}\n{}",
        grid.width(),
        grid.height(),
        encode(grid)
    )
}

/// Parse a document into its header and the decoded grid
///
/// # Errors
///
/// Returns header errors from [`parse_header`]
pub fn parse_document(document: &str) -> Result<(Header, Grid)> {
    parse_document_with(document, DecodeMode::Lenient)
}

/// Parse a document with an explicit [`DecodeMode`]
///
/// # Errors
///
/// Returns header errors from [`parse_header`], and in strict mode
/// [`PatternError::UnrecognizedSymbol`](crate::PatternError::UnrecognizedSymbol)
/// for stray characters in the pattern text
pub fn parse_document_with(document: &str, mode: DecodeMode) -> Result<(Header, Grid)> {
    let (header, pattern) = parse_header(document)?;
    let grid = decode_with(pattern, header.width, header.height, mode)?;
    Ok((header, grid))
}
