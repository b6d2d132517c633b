use log::trace;

use crate::cells::HexCell;
use crate::coordinates::AxialCoordinate;
use crate::errors::*;
use crate::grid_dimensions::{GridDimensions, HexGridDimensions};
use crate::grid_iterators::HexGridCellIter;
use crate::grid_traits::MazeGrid;
use crate::units::Radius;
use crate::utils::{self, FnvHashMap};

/// A hexagon shaped grid of pointed-top hexagons centred on the origin.
///
/// Cells live in a hash map keyed directly by their axial coordinate, holding only
/// the coordinates within the radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexGrid {
    dimensions: HexGridDimensions,
    cells: FnvHashMap<AxialCoordinate, HexCell>,
}

impl HexGrid {
    pub fn new(radius: Radius) -> Result<HexGrid> {
        let dimensions = HexGridDimensions::new(radius)?;
        let mut cells = utils::fnv_hashmap(dimensions.size().0);
        for coord in HexGridCellIter::new(dimensions) {
            cells.insert(coord, HexCell::new());
        }
        trace!("allocated hexagonal grid of radius {} with {} cells", radius.0, cells.len());

        Ok(HexGrid { dimensions, cells })
    }

    #[inline]
    pub fn dimensions(&self) -> &HexGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn radius(&self) -> Radius {
        self.dimensions.radius()
    }
}

impl MazeGrid for HexGrid {
    type Coord = AxialCoordinate;
    type CoordIter = HexGridCellIter;

    #[inline]
    fn size(&self) -> usize {
        self.cells.len()
    }

    /// The centre of the grid.
    #[inline]
    fn start(&self) -> AxialCoordinate {
        AxialCoordinate::new(0, 0)
    }

    #[inline]
    fn in_grid(&self, coord: AxialCoordinate) -> bool {
        self.dimensions.contains(coord)
    }

    #[inline]
    fn get(&self, coord: AxialCoordinate) -> Option<&HexCell> {
        self.cells.get(&coord)
    }

    #[inline]
    fn get_mut(&mut self, coord: AxialCoordinate) -> Option<&mut HexCell> {
        self.cells.get_mut(&coord)
    }

    fn iter(&self) -> HexGridCellIter {
        HexGridCellIter::new(self.dimensions)
    }
}
