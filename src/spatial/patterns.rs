//! Built-in base patterns

use crate::rle::decode::decode;
use crate::spatial::grid::Grid;

/// Pattern text of a glider padded to a 7x5 box
///
/// The margin keeps neighbouring gliders from interacting when tiled.
pub const PADDED_GLIDER_RLE: &str = "$3bo$2bo$2b3o!";
/// Width of [`PADDED_GLIDER_RLE`]
pub const PADDED_GLIDER_WIDTH: usize = 7;
/// Height of [`PADDED_GLIDER_RLE`]
pub const PADDED_GLIDER_HEIGHT: usize = 5;

/// Glider with one dead row above and below and two dead columns on each side
pub fn padded_glider() -> Grid {
    decode(PADDED_GLIDER_RLE, PADDED_GLIDER_WIDTH, PADDED_GLIDER_HEIGHT)
}
