//! Spatial data structures and grid composition
//!
//! This module contains spatial-related functionality including:
//! - The cell grid shared by every other module
//! - Uniform and stencil-gated tiling
//! - Built-in base patterns

/// Cell and grid data model
pub mod grid;
/// Built-in base patterns
pub mod patterns;
/// Uniform and stencil-gated tiling
pub mod tiles;

pub use grid::{Cell, Grid};
pub use tiles::{stencil_tile, tile};
