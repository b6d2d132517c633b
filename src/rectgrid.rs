use log::trace;

use crate::cells::RectCell;
use crate::coordinates::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid_dimensions::{GridDimensions, RectGridDimensions};
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::grid_traits::MazeGrid;
use crate::units::{Height, Width};

/// A `width` x `height` grid of square cells stored densely, row major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectGrid {
    dimensions: RectGridDimensions,
    cells: Vec<RectCell>,
}

impl RectGrid {
    pub fn new(width: Width, height: Height) -> Result<RectGrid> {
        let dimensions = RectGridDimensions::new(width, height)?;
        let cells_count = dimensions.size().0;
        trace!("allocating {}x{} rectangular grid", width.0, height.0);

        Ok(RectGrid {
            dimensions,
            cells: vec![RectCell::new(); cells_count],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(self.dimensions)
    }
}

impl MazeGrid for RectGrid {
    type Coord = Cartesian2DCoordinate;
    type CoordIter = RectGridCellIter;

    #[inline]
    fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn start(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(0, 0)
    }

    #[inline]
    fn in_grid(&self, coord: Cartesian2DCoordinate) -> bool {
        self.dimensions.contains(coord)
    }

    #[inline]
    fn get(&self, coord: Cartesian2DCoordinate) -> Option<&RectCell> {
        self.dimensions.index_of(coord).and_then(move |index| self.cells.get(index))
    }

    #[inline]
    fn get_mut(&mut self, coord: Cartesian2DCoordinate) -> Option<&mut RectCell> {
        let index = self.dimensions.index_of(coord)?;
        self.cells.get_mut(index)
    }

    #[inline]
    fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.dimensions)
    }
}
