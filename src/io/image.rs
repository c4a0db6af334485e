//! Stencil grids from image brightness

use ndarray::Array2;
use std::path::Path;

use crate::io::error::{PatternError, Result};
use crate::spatial::grid::{Cell, Grid};

/// Load an image as 8-bit grayscale samples of shape `(height, width)`
///
/// # Errors
///
/// Returns [`PatternError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_brightness<P: AsRef<Path>>(path: P) -> Result<Array2<u8>> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| PatternError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let luma = img.to_luma8();
    let (width, height) = (luma.width() as usize, luma.height() as usize);

    let mut samples = Array2::zeros((height, width));
    for (x, y, pixel) in luma.enumerate_pixels() {
        if let Some(sample) = samples.get_mut((y as usize, x as usize)) {
            *sample = pixel.0[0];
        }
    }

    log::debug!("loaded {width}x{height} brightness samples from {}", path.display());
    Ok(samples)
}

/// Threshold brightness samples into a stencil
///
/// A sample strictly greater than `threshold` becomes alive.
pub fn sample_to_grid(samples: &Array2<u8>, threshold: u8) -> Grid {
    Grid::from_array(samples.mapv(|sample| Cell::from_alive(sample > threshold)))
}
