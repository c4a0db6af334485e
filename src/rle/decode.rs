//! RLE pattern text decoding
//!
//! The default decoder is permissive: characters outside `{digits, b, o, $}`
//! are skipped and runs that overflow the declared dimensions are clipped.
//! [`DecodeMode::Strict`] reports stray characters instead.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::io::error::{PatternError, Result};
use crate::spatial::grid::{Cell, Grid};

/// How to treat characters outside the RLE alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Skip them silently
    #[default]
    Lenient,
    /// Fail on the first one that is not whitespace
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Count(usize),
    Run(Cell),
    EndOfLine,
    Unrecognized { offset: usize, symbol: char },
}

struct Tokens<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (offset, symbol) = self.chars.next()?;
        let token = match symbol {
            'b' => Token::Run(Cell::Dead),
            'o' => Token::Run(Cell::Alive),
            '$' => Token::EndOfLine,
            '0'..='9' => {
                let mut count = digit_value(symbol);
                while let Some(&(_, next)) = self.chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    count = count.saturating_mul(10).saturating_add(digit_value(next));
                    self.chars.next();
                }
                Token::Count(count)
            }
            _ => Token::Unrecognized { offset, symbol },
        };
        Some(token)
    }
}

fn digit_value(ch: char) -> usize {
    ch.to_digit(10).map_or(0, |d| d as usize)
}

/// Decode pattern text into a `width` x `height` grid, skipping unknown characters
///
/// One trailing `!` is stripped. Cells that would land outside the grid are
/// dropped. This never fails.
pub fn decode(pattern_text: &str, width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height);
    let mut cursor = Cursor::default();

    for token in Tokens::new(strip_terminator(pattern_text)) {
        cursor.apply(token, &mut grid);
    }

    grid
}

/// Decode pattern text with an explicit [`DecodeMode`]
///
/// # Errors
///
/// In [`DecodeMode::Strict`], returns [`PatternError::UnrecognizedSymbol`]
/// for the first non-whitespace character outside the RLE alphabet.
/// [`DecodeMode::Lenient`] never fails.
pub fn decode_with(
    pattern_text: &str,
    width: usize,
    height: usize,
    mode: DecodeMode,
) -> Result<Grid> {
    if mode == DecodeMode::Strict {
        let stray = Tokens::new(strip_terminator(pattern_text)).find_map(|token| match token {
            Token::Unrecognized { offset, symbol } if !symbol.is_whitespace() => {
                Some(PatternError::UnrecognizedSymbol { symbol, offset })
            }
            _ => None,
        });
        if let Some(error) = stray {
            return Err(error);
        }
    }

    Ok(decode(pattern_text, width, height))
}

fn strip_terminator(pattern_text: &str) -> &str {
    let trimmed = pattern_text.trim_end();
    trimmed.strip_suffix('!').unwrap_or(trimmed)
}

#[derive(Debug, Default)]
struct Cursor {
    row: usize,
    col: usize,
    pending: Option<usize>,
}

impl Cursor {
    // A missing or zero count means one
    fn take_count(&mut self) -> usize {
        self.pending.take().filter(|&n| n > 0).unwrap_or(1)
    }

    fn apply(&mut self, token: Token, grid: &mut Grid) {
        match token {
            Token::Count(count) => self.pending = Some(count),
            Token::Run(cell) => {
                let count = self.take_count();
                if self.row >= grid.height() {
                    return;
                }
                let end = self.col.saturating_add(count).min(grid.width());
                grid.cells_mut()
                    .row_mut(self.row)
                    .iter_mut()
                    .skip(self.col)
                    .take(end.saturating_sub(self.col))
                    .for_each(|slot| *slot = cell);
                self.col = end.max(self.col);
            }
            Token::EndOfLine => {
                self.row = self.row.saturating_add(self.take_count());
                self.col = 0;
            }
            Token::Unrecognized { .. } => {}
        }
    }
}
