use crate::cells::{CellOf, CellSide};
use crate::coordinates::Coordinate;
use crate::errors::*;

/// The capability set a grid topology offers to maze generators and renderers.
///
/// Generators only ever talk to a grid through this trait, so they never need to know
/// whether they are carving squares or hexagons.
pub trait MazeGrid {
    type Coord: Coordinate;
    type CoordIter: Iterator<Item = Self::Coord>;

    /// Number of cells in the grid.
    fn size(&self) -> usize;

    /// The fixed cell generation begins from.
    fn start(&self) -> Self::Coord;

    fn in_grid(&self, coord: Self::Coord) -> bool;

    fn get(&self, coord: Self::Coord) -> Option<&CellOf<Self::Coord>>;

    fn get_mut(&mut self, coord: Self::Coord) -> Option<&mut CellOf<Self::Coord>>;

    /// All the grid's coordinates, in a deterministic order.
    fn iter(&self) -> Self::CoordIter;

    /// Candidate neighbours in the topology's fixed order. Not filtered by `in_grid`.
    #[inline]
    fn neighbours(&self, coord: Self::Coord) -> <Self::Coord as Coordinate>::CoordinateSmallVec {
        coord.neighbour_candidates()
    }

    /// Like `get`, but a coordinate outside the grid is an `InvalidGridCoordinate` error.
    fn cell(&self, coord: Self::Coord) -> Result<&CellOf<Self::Coord>> {
        self.get(coord)
            .ok_or_else(|| ErrorKind::InvalidGridCoordinate(coord.to_string()).into())
    }

    /// Carve a passage between two adjacent cells, removing the facing wall from each.
    ///
    /// Errors, without touching either cell, if a coordinate is not in the grid or
    /// `b` is not one of `a`'s neighbours.
    fn break_wall_between(&mut self, a: Self::Coord, b: Self::Coord) -> Result<()> {
        let side = a.side_towards(b)
            .ok_or_else(|| Error::from(ErrorKind::NotAdjacent(a.to_string(), b.to_string())))?;
        self.cell(b)?;

        self.get_mut(a)
            .ok_or_else(|| Error::from(ErrorKind::InvalidGridCoordinate(a.to_string())))?
            .remove_side(side);
        self.get_mut(b)
            .ok_or_else(|| Error::from(ErrorKind::InvalidGridCoordinate(b.to_string())))?
            .remove_side(side.opposite());

        Ok(())
    }

    /// Is there a passage between `a` and `b`? False unless they are adjacent grid members
    /// with the wall between them removed on both sides.
    fn is_wall_open(&self, a: Self::Coord, b: Self::Coord) -> bool {
        match (a.side_towards(b), self.get(a), self.get(b)) {
            (Some(side), Some(cell_a), Some(cell_b)) => {
                !cell_a.has_side(side) && !cell_b.has_side(side.opposite())
            }
            _ => false,
        }
    }

    /// Is the neighbour across `side` a grid member reachable through an open wall?
    fn is_neighbour_open(&self, coord: Self::Coord, side: <Self::Coord as Coordinate>::Side) -> bool {
        self.is_wall_open(coord, coord.neighbour_at(side))
    }
}
