use std::fmt::Debug;
use std::marker::PhantomData;

use bit_set::BitSet;

use crate::coordinates::Coordinate;

/// One wall facet of a cell. Each topology has a fixed, ordered set of sides.
pub trait CellSide: Eq + PartialEq + Copy + Clone + Debug + 'static {
    /// Every side in the topology's canonical order.
    const ALL: &'static [Self];

    fn index(self) -> usize;

    /// The side of an adjacent cell that shares the same wall.
    fn opposite(self) -> Self;
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum RectSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellSide for RectSide {
    const ALL: &'static [RectSide] = &[RectSide::Top,
                                       RectSide::Right,
                                       RectSide::Bottom,
                                       RectSide::Left];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn opposite(self) -> RectSide {
        match self {
            RectSide::Top => RectSide::Bottom,
            RectSide::Right => RectSide::Left,
            RectSide::Bottom => RectSide::Top,
            RectSide::Left => RectSide::Right,
        }
    }
}

/// Sides of a pointed-top hexagon.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum HexSide {
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
}

impl CellSide for HexSide {
    const ALL: &'static [HexSide] = &[HexSide::TopLeft,
                                      HexSide::TopRight,
                                      HexSide::Right,
                                      HexSide::BottomRight,
                                      HexSide::BottomLeft,
                                      HexSide::Left];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn opposite(self) -> HexSide {
        match self {
            HexSide::TopLeft => HexSide::BottomRight,
            HexSide::TopRight => HexSide::BottomLeft,
            HexSide::Right => HexSide::Left,
            HexSide::BottomRight => HexSide::TopLeft,
            HexSide::BottomLeft => HexSide::TopRight,
            HexSide::Left => HexSide::Right,
        }
    }
}

/// The walls still standing around one grid cell.
///
/// A cell starts with every side standing and sides are only ever removed, so
/// `has_all_sides` doubles as the "never visited" marker while carving a maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<SideT: CellSide> {
    standing: BitSet,
    side_type: PhantomData<SideT>,
}

pub type RectCell = Cell<RectSide>;
pub type HexCell = Cell<HexSide>;

/// The cell type holding the walls of a coordinate's topology.
pub type CellOf<CoordT> = Cell<<CoordT as Coordinate>::Side>;

impl<SideT: CellSide> Cell<SideT> {
    pub fn new() -> Cell<SideT> {
        let mut standing = BitSet::with_capacity(SideT::ALL.len());
        for side in SideT::ALL {
            standing.insert(side.index());
        }
        Cell {
            standing,
            side_type: PhantomData,
        }
    }

    /// Knock down a wall. Returns false if it was already gone.
    pub fn remove_side(&mut self, side: SideT) -> bool {
        self.standing.remove(side.index())
    }

    #[inline]
    pub fn has_side(&self, side: SideT) -> bool {
        self.standing.contains(side.index())
    }

    #[inline]
    pub fn has_all_sides(&self) -> bool {
        self.sides_count() == SideT::ALL.len()
    }

    #[inline]
    pub fn sides_count(&self) -> usize {
        self.standing.len()
    }

    /// Standing sides, in the canonical side order.
    pub fn sides<'a>(&'a self) -> impl Iterator<Item = SideT> + 'a {
        SideT::ALL.iter().cloned().filter(move |&side| self.has_side(side))
    }

    /// Removed sides, in the canonical side order.
    pub fn open_sides<'a>(&'a self) -> impl Iterator<Item = SideT> + 'a {
        SideT::ALL.iter().cloned().filter(move |&side| !self.has_side(side))
    }
}

impl<SideT: CellSide> Default for Cell<SideT> {
    fn default() -> Self {
        Cell::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_cells_have_all_sides() {
        let rect = RectCell::new();
        assert!(rect.has_all_sides());
        assert_eq!(rect.sides_count(), 4);
        assert_eq!(rect.sides().collect::<Vec<_>>(), RectSide::ALL);

        let hex = HexCell::new();
        assert!(hex.has_all_sides());
        assert_eq!(hex.sides_count(), 6);
        assert_eq!(hex.open_sides().count(), 0);
    }

    #[test]
    fn side_indices_match_canonical_order() {
        for (i, side) in RectSide::ALL.iter().enumerate() {
            assert_eq!(side.index(), i);
        }
        for (i, side) in HexSide::ALL.iter().enumerate() {
            assert_eq!(side.index(), i);
        }
    }

    #[test]
    fn opposites_are_involutions() {
        for &side in RectSide::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
        for &side in HexSide::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn removing_a_side_happens_once() {
        let mut cell = HexCell::new();
        assert!(cell.remove_side(HexSide::Left));
        assert!(!cell.has_all_sides());
        assert!(!cell.has_side(HexSide::Left));
        assert_eq!(cell.sides_count(), 5);

        assert!(!cell.remove_side(HexSide::Left));
        assert_eq!(cell.sides_count(), 5);
        assert_eq!(cell.open_sides().collect::<Vec<_>>(), vec![HexSide::Left]);
    }

    #[test]
    fn sides_iterate_in_canonical_order() {
        let mut cell = RectCell::new();
        cell.remove_side(RectSide::Right);
        cell.remove_side(RectSide::Top);
        assert_eq!(cell.sides().collect::<Vec<_>>(),
                   vec![RectSide::Bottom, RectSide::Left]);
        assert_eq!(cell.open_sides().collect::<Vec<_>>(),
                   vec![RectSide::Top, RectSide::Right]);
    }
}
