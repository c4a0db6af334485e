//! RLE header line recognition
//!
//! A document is free-form leading text, one `x = W, y = H, rule = Bn/Sn`
//! header and the pattern text. Files that break the header across lines or
//! drop the commas are still accepted by locating each field on its own.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::io::error::{PatternError, Result, invalid_header};
use crate::spatial::grid::Grid;

/// Dimensions and rule declared by an RLE header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Pattern width (`x`)
    pub width: usize,
    /// Pattern height (`y`)
    pub height: usize,
    /// Rule string as written, e.g. `B3/S23`
    pub rule: String,
}

impl Header {
    /// Build a header from the key/value map produced by [`parse_fields`]
    ///
    /// Keys are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidHeader`] if `x`, `y` or `rule` is absent,
    /// a dimension does not fit in `usize`, or the declared grid is too large
    /// to allocate
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Result<Self> {
        let lookup = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str())
                .ok_or_else(|| invalid_header(&format!("missing '{key}' field")))
        };
        let dimension = |key: &str| {
            let value = lookup(key)?;
            value
                .parse::<usize>()
                .map_err(|e| invalid_header(&format!("'{key}' = '{value}': {e}")))
        };

        let width = dimension("x")?;
        let height = dimension("y")?;
        if Grid::checked_area(width, height).is_none() {
            return Err(invalid_header(&format!(
                "{width}x{height} grid is too large"
            )));
        }

        Ok(Self {
            width,
            height,
            rule: lookup("rule")?.to_string(),
        })
    }
}

type LazyRegex = LazyLock<Option<Regex>>;

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn expression(lazy: &'static LazyRegex) -> Result<&'static Regex> {
    lazy.as_ref()
        .ok_or_else(|| invalid_header(&"header expression failed to compile"))
}

static WIDTH_DECLARATION: LazyRegex = LazyLock::new(|| compile(r"x\s*=\s*[0-9]+"));

static HEADER_LINE: LazyRegex = LazyLock::new(|| {
    compile(r"(?i)x\s*=\s*[0-9]+\s*,\s*y\s*=\s*[0-9]+\s*,\s*rule\s*=\s*b[0-9]*/s[0-9]*")
});

static X_FRAGMENT: LazyRegex = LazyLock::new(|| compile(r"(?i)x\s*=\s*[0-9]+"));
static Y_FRAGMENT: LazyRegex = LazyLock::new(|| compile(r"(?i)y\s*=\s*[0-9]+"));
static RULE_FRAGMENT: LazyRegex =
    LazyLock::new(|| compile(r"(?i)rule\s*=\s*b[0-9]*/s[0-9]*"));

/// Split a document into its header and the raw pattern text
///
/// The returned pattern text is everything after the recognised header,
/// trimmed of surrounding whitespace.
///
/// # Errors
///
/// - [`PatternError::MissingHeader`] if no `x = <int>` appears anywhere
/// - [`PatternError::InvalidHeader`] if `x`, `y` and `rule` cannot all be found
pub fn parse_header(document: &str) -> Result<(Header, &str)> {
    let declaration = expression(&WIDTH_DECLARATION)?
        .find(document)
        .ok_or(PatternError::MissingHeader)?;
    let search_from = declaration.start();
    let remaining = document.get(search_from..).unwrap_or_default();

    let (header_text, header_end) = if let Some(line) = expression(&HEADER_LINE)?.find(remaining) {
        (line.as_str().to_string(), search_from + line.end())
    } else {
        log::debug!("no single-line header, searching fields independently");
        let fragments = [&X_FRAGMENT, &Y_FRAGMENT, &RULE_FRAGMENT]
            .into_iter()
            .map(|lazy| expression(lazy).map(|re| re.find(remaining)))
            .collect::<Result<Option<Vec<_>>>>()?
            .ok_or_else(|| invalid_header(&"expected 'x', 'y' and 'rule' declarations"))?;

        let text = fragments
            .iter()
            .map(regex::Match::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let end = fragments.iter().map(regex::Match::end).max().unwrap_or(0);
        (text, search_from + end)
    };

    let header = Header::from_fields(&parse_fields(&header_text))?;
    let pattern = document.get(header_end..).unwrap_or_default().trim();

    log::debug!(
        "header {}x{} rule {} with {} bytes of pattern text",
        header.width,
        header.height,
        header.rule,
        pattern.len()
    );

    Ok((header, pattern))
}

/// Split `key = value` pairs separated by commas
///
/// Pieces without `=` are skipped. Keys and values are trimmed.
pub fn parse_fields(header_text: &str) -> BTreeMap<String, String> {
    header_text
        .split(',')
        .filter_map(|piece| piece.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
