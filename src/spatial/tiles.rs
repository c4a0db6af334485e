//! Grid composition by repeating a base pattern
//!
//! Both operations are total: an empty input, a zero repeat factor or an
//! output too large to allocate yields the empty grid instead of an error,
//! so composition chains never need to handle failure. Inputs are only read;
//! the result is a fresh grid.

use ndarray::Array2;

use crate::spatial::grid::{Cell, Grid};

// Output `(height, width)` when the whole grid can be allocated
fn scaled_shape(
    (height, width): (usize, usize),
    (scale_y, scale_x): (usize, usize),
) -> Option<(usize, usize)> {
    let shape = (height.checked_mul(scale_y)?, width.checked_mul(scale_x)?);
    Grid::checked_area(shape.1, shape.0).map(|_| shape)
}

/// Repeat `base` `repeat_x` times horizontally and `repeat_y` times vertically
///
/// The output cell at `(r, c)` is `base[r % height][c % width]`.
pub fn tile(base: &Grid, repeat_x: usize, repeat_y: usize) -> Grid {
    if base.is_empty() || repeat_x == 0 || repeat_y == 0 {
        return Grid::empty();
    }

    let (base_height, base_width) = (base.height(), base.width());
    let Some(shape) = scaled_shape((base_height, base_width), (repeat_y, repeat_x)) else {
        log::warn!("tiling {base_width}x{base_height} base {repeat_x}x{repeat_y} times overflows");
        return Grid::empty();
    };

    let source = base.as_array();
    let cells = Array2::from_shape_fn(shape, |(row, col)| {
        source
            .get((row % base_height, col % base_width))
            .copied()
            .unwrap_or_default()
    });

    log::trace!(
        "tiled {base_width}x{base_height} base {repeat_x}x{repeat_y} times into {}x{}",
        cells.ncols(),
        cells.nrows()
    );

    Grid::from_array(cells)
}

/// Place a copy of `base` in every block whose stencil cell is alive
///
/// The output is `stencil.width * base.width` wide and
/// `stencil.height * base.height` tall. Only live cells of `base` are
/// written; every other output cell stays dead. An output too large to
/// allocate gives the empty grid.
pub fn stencil_tile(stencil: &Grid, base: &Grid) -> Grid {
    if stencil.is_empty() || base.is_empty() {
        return Grid::empty();
    }

    let (base_height, base_width) = (base.height(), base.width());
    let Some((height, width)) = scaled_shape(
        (stencil.height(), stencil.width()),
        (base_height, base_width),
    ) else {
        log::warn!(
            "stencil {}x{} over {base_width}x{base_height} base overflows",
            stencil.width(),
            stencil.height()
        );
        return Grid::empty();
    };

    let mut output = Grid::new(width, height);
    let live_offsets: Vec<(usize, usize)> = base
        .as_array()
        .indexed_iter()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(offset, _)| offset)
        .collect();

    for ((stencil_row, stencil_col), cell) in stencil.as_array().indexed_iter() {
        if !cell.is_alive() {
            continue;
        }

        let top = stencil_row * base_height;
        let left = stencil_col * base_width;
        let cells = output.cells_mut();
        for &(row, col) in &live_offsets {
            if let Some(out) = cells.get_mut((top + row, left + col)) {
                *out = Cell::Alive;
            }
        }
    }

    log::trace!(
        "stencil {}x{} with {} live cells produced {}x{} grid",
        stencil.width(),
        stencil.height(),
        stencil.alive_count(),
        output.width(),
        output.height()
    );

    output
}
