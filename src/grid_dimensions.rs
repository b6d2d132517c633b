use crate::coordinates::{AxialCoordinate, Cartesian2DCoordinate, Coordinate};
use crate::errors::*;
use crate::units::{EdgesCount, Height, NodesCount, Radius, Width};

/// The shape of a grid: how many cells it has and which coordinates lie within it.
pub trait GridDimensions {
    type Coord: Coordinate;

    fn size(&self) -> NodesCount;

    /// The in-grid predicate.
    fn contains(&self, coord: Self::Coord) -> bool;

    /// Node and edge capacity hints for a graph of a maze's passages.
    /// A spanning tree has one fewer edge than it has nodes.
    fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (cells_count, EdgesCount(cells_count.0.saturating_sub(1)))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RectGridDimensions {
    width: Width,
    height: Height,
}

impl RectGridDimensions {
    pub fn new(width: Width, height: Height) -> Result<RectGridDimensions> {
        if width.0 == 0 || height.0 == 0 {
            return Err(ErrorKind::InvalidDimensions(format!("{}x{} rectangular grid has no cells",
                                                            width.0,
                                                            height.0))
                .into());
        }
        if width.0.checked_mul(height.0).map_or(true, |size| size > isize::MAX as usize) {
            return Err(ErrorKind::InvalidDimensions(format!("{}x{} rectangular grid is too large",
                                                            width.0,
                                                            height.0))
                .into());
        }
        Ok(RectGridDimensions { width, height })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    /// Row major index of a coordinate, None if it is outside the grid.
    #[inline]
    pub fn index_of(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize + coord.y as usize * self.width.0)
        } else {
            None
        }
    }

    #[inline]
    pub fn coordinate_at(&self, index: usize) -> Cartesian2DCoordinate {
        let Width(width) = self.width;
        Cartesian2DCoordinate::new((index % width) as isize, (index / width) as isize)
    }
}

impl GridDimensions for RectGridDimensions {
    type Coord = Cartesian2DCoordinate;

    #[inline(always)]
    fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    #[inline(always)]
    fn contains(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.width.0 &&
        (coord.y as usize) < self.height.0
    }
}

/// A hexagon shaped region of hexagons centred on the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HexGridDimensions {
    radius: Radius,
}

impl HexGridDimensions {
    pub fn new(radius: Radius) -> Result<HexGridDimensions> {
        let Radius(n) = radius;
        let cells_count = n.checked_add(1)
            .and_then(|next| n.checked_mul(next))
            .and_then(|pairs| pairs.checked_mul(3))
            .and_then(|ring_cells| ring_cells.checked_add(1));
        if cells_count.map_or(true, |size| size > isize::MAX as usize) {
            return Err(ErrorKind::InvalidDimensions(format!("hexagonal grid of radius {} is too \
                                                             large",
                                                            n))
                .into());
        }
        Ok(HexGridDimensions { radius })
    }

    #[inline]
    pub fn radius(&self) -> Radius {
        self.radius
    }
}

impl GridDimensions for HexGridDimensions {
    type Coord = AxialCoordinate;

    /// The centre cell plus six cells per step out to the radius: 3n(n + 1) + 1.
    fn size(&self) -> NodesCount {
        let Radius(n) = self.radius;
        NodesCount(3 * n * (n + 1) + 1)
    }

    #[inline(always)]
    fn contains(&self, coord: AxialCoordinate) -> bool {
        coord.q.unsigned_abs() + coord.r.unsigned_abs() + coord.s().unsigned_abs() <=
        2 * self.radius.0
    }
}
