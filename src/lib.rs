//! **gridmazes** generates perfect mazes over rectangular and hexagonal grids and renders
//! them as text or images.
//!
//! Grid topologies implement `grid_traits::MazeGrid`; the maze generator only works through
//! that trait, so any grid shape can be carved.

pub mod analysis;
pub mod cells;
pub mod coordinates;
pub mod errors;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grid_traits;
pub mod hexgrid;
pub mod maze;
pub mod rectgrid;
pub mod renderers;
pub mod units;
pub mod utils;
