//! Fixed-size two-state cell grid shared by the codec and the tiling engine
//!
//! Cells are stored row-major in a single [`Array2`] of shape `(height, width)`,
//! so every row has the same length by construction. A grid with either
//! dimension equal to zero is the empty grid.

use ndarray::{Array2, ArrayView1, Axis};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{PatternError, Result};

/// Binary cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell
    #[default]
    Dead,
    /// Live cell
    Alive,
}

impl Cell {
    /// Map a boolean to a cell state
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }

    /// Whether the cell is alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// RLE symbol for a run of this state
    pub const fn symbol(self) -> char {
        match self {
            Self::Alive => 'o',
            Self::Dead => 'b',
        }
    }

    const fn picture(self) -> char {
        match self {
            Self::Alive => 'o',
            Self::Dead => '.',
        }
    }
}

/// Rectangular grid of cells indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::Dead),
        }
    }

    /// Number of cells in a `width` x `height` grid, if such a grid can be allocated
    ///
    /// `None` when the product of the non-zero dimensions exceeds `isize::MAX`.
    pub fn checked_area(width: usize, height: usize) -> Option<usize> {
        width
            .max(1)
            .checked_mul(height.max(1))
            .filter(|&cells| isize::try_from(cells).is_ok())
            .map(|_| width * height)
    }

    /// The 0x0 grid
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Wrap an existing `(height, width)` array
    pub const fn from_array(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Build a grid from a sequence of rows
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidSourceData`] if the rows differ in length
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PatternError::InvalidSourceData {
                reason: format!(
                    "row {index} has {} cells, expected {width}",
                    row.len()
                ),
            });
        }

        let flat: Vec<Cell> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((rows.len(), width), flat).map_err(|e| {
            PatternError::InvalidSourceData {
                reason: e.to_string(),
            }
        })?;
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// True when the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.axis_iter(Axis(0))
    }

    /// Number of live cells
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Borrow the backing array
    pub const fn as_array(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Renders one line per row, `o` for alive and `.` for dead
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.picture())?;
            }
        }
        Ok(())
    }
}

/// Parses the picture notation produced by [`Display`](fmt::Display)
impl FromStr for Grid {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        'o' => Ok(Cell::Alive),
                        '.' => Ok(Cell::Dead),
                        other => Err(PatternError::InvalidSourceData {
                            reason: format!("unexpected picture character {other:?}"),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(&rows)
    }
}
