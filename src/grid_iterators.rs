use std::cmp;

use crate::coordinates::{AxialCoordinate, Cartesian2DCoordinate};
use crate::grid_dimensions::{GridDimensions, HexGridDimensions, RectGridDimensions};
use crate::units::{Height, Width};

/// Every coordinate of a rectangular grid in row major order.
#[derive(Debug, Copy, Clone)]
pub struct RectGridCellIter {
    dimensions: RectGridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(dimensions: RectGridDimensions) -> RectGridCellIter {
        RectGridCellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = self.dimensions.coordinate_at(self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Rows of a rectangular grid, top to bottom.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    current_row: usize,
    row_length: Width,
    rows_count: Height,
}

impl RectRowIter {
    pub fn new(dimensions: RectGridDimensions) -> RectRowIter {
        RectRowIter {
            current_row: 0,
            row_length: dimensions.width(),
            rows_count: dimensions.height(),
        }
    }
}

impl ExactSizeIterator for RectRowIter {}
impl Iterator for RectRowIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let Height(count) = self.rows_count;
        if self.current_row < count {
            let Width(length) = self.row_length;
            let y = self.current_row as isize;
            let coords = (0..length)
                .map(|x| Cartesian2DCoordinate::new(x as isize, y))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_count.0 - self.current_row;
        (remaining, Some(remaining))
    }
}

/// Every coordinate of a hexagonal grid, row (r) by row, each row in increasing q.
#[derive(Debug, Copy, Clone)]
pub struct HexGridCellIter {
    radius: isize,
    next_coord: Option<AxialCoordinate>,
    remaining: usize,
}

impl HexGridCellIter {
    pub fn new(dimensions: HexGridDimensions) -> HexGridCellIter {
        let radius = dimensions.radius().0 as isize;
        let top_row = -radius;
        HexGridCellIter {
            radius,
            next_coord: Some(AxialCoordinate::new(Self::row_q_min(radius, top_row), top_row)),
            remaining: dimensions.size().0,
        }
    }

    // Row r holds the q where both |q| and |s| = |q + r| are within the radius.
    #[inline]
    fn row_q_min(radius: isize, r: isize) -> isize {
        cmp::max(-radius, -radius - r)
    }

    #[inline]
    fn row_q_max(radius: isize, r: isize) -> isize {
        cmp::min(radius, radius - r)
    }
}

impl ExactSizeIterator for HexGridCellIter {}
impl Iterator for HexGridCellIter {
    type Item = AxialCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        let coord = self.next_coord?;

        self.next_coord = if coord.q < Self::row_q_max(self.radius, coord.r) {
            Some(AxialCoordinate::new(coord.q + 1, coord.r))
        } else if coord.r < self.radius {
            let next_row = coord.r + 1;
            Some(AxialCoordinate::new(Self::row_q_min(self.radius, next_row), next_row))
        } else {
            None
        };
        self.remaining -= 1;

        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
