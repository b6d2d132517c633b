use std::convert::From;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::cells::{CellSide, HexSide, RectSide};
use crate::errors::*;

/// A position on a grid with value semantics; equal coordinates are interchangeable
/// so they are usable directly as hash map keys.
pub trait Coordinate
    : PartialEq + Eq + Hash + Copy + Clone + Debug + Display + Ord + PartialOrd {
    type Side: CellSide;
    // Deref<Target=[Self]> gives access to the `iter` of slices.
    type CoordinateSmallVec: FromIterator<Self> + Deref<Target = [Self]>;

    /// All potentially adjacent positions in the topology's fixed order.
    /// Not filtered by any grid's membership.
    fn neighbour_candidates(&self) -> Self::CoordinateSmallVec;

    /// The adjacent position across the given side.
    fn neighbour_at(&self, side: Self::Side) -> Self;

    /// The side of `self` that faces `other`, None if `other` is not adjacent.
    fn side_towards(&self, other: Self) -> Option<Self::Side>;
}

/// Rectangular grid offset coordinate. Signed so that the candidates left of and above
/// the grid are representable.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: isize,
    pub y: isize,
}

impl Cartesian2DCoordinate {
    pub fn new(x: isize, y: isize) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl Coordinate for Cartesian2DCoordinate {
    type Side = RectSide;
    type CoordinateSmallVec = SmallVec<[Self; 4]>;

    fn neighbour_candidates(&self) -> Self::CoordinateSmallVec {
        let (x, y) = (self.x, self.y);
        [Cartesian2DCoordinate::new(x - 1, y),
         Cartesian2DCoordinate::new(x + 1, y),
         Cartesian2DCoordinate::new(x, y - 1),
         Cartesian2DCoordinate::new(x, y + 1)]
            .iter()
            .cloned()
            .collect()
    }

    fn neighbour_at(&self, side: RectSide) -> Self {
        let (x, y) = (self.x, self.y);
        match side {
            RectSide::Top => Cartesian2DCoordinate::new(x, y - 1),
            RectSide::Right => Cartesian2DCoordinate::new(x + 1, y),
            RectSide::Bottom => Cartesian2DCoordinate::new(x, y + 1),
            RectSide::Left => Cartesian2DCoordinate::new(x - 1, y),
        }
    }

    fn side_towards(&self, other: Self) -> Option<RectSide> {
        match (other.x - self.x, other.y - self.y) {
            (-1, 0) => Some(RectSide::Left),
            (1, 0) => Some(RectSide::Right),
            (0, -1) => Some(RectSide::Top),
            (0, 1) => Some(RectSide::Bottom),
            _ => None,
        }
    }
}

impl From<(isize, isize)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (isize, isize)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Hexagonal grid axial coordinate.
///
/// The third cube coordinate `s` is always derived as `-q - r`, so `q + r + s == 0` holds
/// by construction. See https://www.redblobgames.com/grids/hexagons/
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct AxialCoordinate {
    pub q: isize,
    pub r: isize,
}

impl AxialCoordinate {
    pub fn new(q: isize, r: isize) -> AxialCoordinate {
        AxialCoordinate { q, r }
    }

    #[inline]
    pub fn s(&self) -> isize {
        -self.q - self.r
    }

    /// Number of steps between the origin and this coordinate.
    pub fn distance_from_origin(&self) -> usize {
        (self.q.unsigned_abs() + self.r.unsigned_abs() + self.s().unsigned_abs()) / 2
    }
}

impl Coordinate for AxialCoordinate {
    type Side = HexSide;
    type CoordinateSmallVec = SmallVec<[Self; 6]>;

    fn neighbour_candidates(&self) -> Self::CoordinateSmallVec {
        let (q, r) = (self.q, self.r);
        [AxialCoordinate::new(q + 1, r),
         AxialCoordinate::new(q + 1, r - 1),
         AxialCoordinate::new(q, r - 1),
         AxialCoordinate::new(q - 1, r),
         AxialCoordinate::new(q - 1, r + 1),
         AxialCoordinate::new(q, r + 1)]
            .iter()
            .cloned()
            .collect()
    }

    fn neighbour_at(&self, side: HexSide) -> Self {
        let (q, r) = (self.q, self.r);
        match side {
            HexSide::Right => AxialCoordinate::new(q + 1, r),
            HexSide::TopRight => AxialCoordinate::new(q + 1, r - 1),
            HexSide::TopLeft => AxialCoordinate::new(q, r - 1),
            HexSide::Left => AxialCoordinate::new(q - 1, r),
            HexSide::BottomLeft => AxialCoordinate::new(q - 1, r + 1),
            HexSide::BottomRight => AxialCoordinate::new(q, r + 1),
        }
    }

    fn side_towards(&self, other: Self) -> Option<HexSide> {
        match (other.q - self.q, other.r - self.r) {
            (1, 0) => Some(HexSide::Right),
            (1, -1) => Some(HexSide::TopRight),
            (0, -1) => Some(HexSide::TopLeft),
            (-1, 0) => Some(HexSide::Left),
            (-1, 1) => Some(HexSide::BottomLeft),
            (0, 1) => Some(HexSide::BottomRight),
            _ => None,
        }
    }
}

impl From<(isize, isize)> for AxialCoordinate {
    fn from(q_r_pair: (isize, isize)) -> AxialCoordinate {
        AxialCoordinate::new(q_r_pair.0, q_r_pair.1)
    }
}

// Only q and r are written, s is always derivable.
impl fmt::Display for AxialCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{q: {}, r: {}}}", self.q, self.r)
    }
}

impl FromStr for AxialCoordinate {
    type Err = Error;

    /// Parses the `Display` format, e.g. `{q: -12, r: 3}`.
    fn from_str(text: &str) -> Result<AxialCoordinate> {
        let malformed = || Error::from(ErrorKind::MalformedCoordinate(text.to_owned()));

        let inner = text.trim()
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .ok_or_else(malformed)?;

        let mut fields = inner.split(',');
        let q = parse_axial_field(fields.next(), "q").ok_or_else(malformed)?;
        let r = parse_axial_field(fields.next(), "r").ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok(AxialCoordinate::new(q, r))
    }
}

fn parse_axial_field(field: Option<&str>, name: &str) -> Option<isize> {
    let (key, value) = field?.split_once(':')?;
    if key.trim() != name {
        return None;
    }
    let value = value.trim();
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<isize>().ok()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn rect_neighbour_candidate_order() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(&*gc(3, 5).neighbour_candidates(),
                   &[gc(2, 5), gc(4, 5), gc(3, 4), gc(3, 6)]);

        // Not filtered, even off the edge of any grid.
        assert_eq!(&*gc(0, 0).neighbour_candidates(),
                   &[gc(-1, 0), gc(1, 0), gc(0, -1), gc(0, 1)]);
    }

    #[test]
    fn hex_neighbour_candidate_order() {
        let ac = |q, r| AxialCoordinate::new(q, r);
        assert_eq!(&*ac(0, 0).neighbour_candidates(),
                   &[ac(1, 0), ac(1, -1), ac(0, -1), ac(-1, 0), ac(-1, 1), ac(0, 1)]);
    }

    #[test]
    fn hex_cube_invariant() {
        for q in -4..5 {
            for r in -4..5 {
                let coord = AxialCoordinate::new(q, r);
                assert_eq!(coord.q + coord.r + coord.s(), 0);
            }
        }
        assert_eq!(AxialCoordinate::new(2, -3).s(), 1);
        assert_eq!(AxialCoordinate::new(2, -3).distance_from_origin(), 3);
        assert_eq!(AxialCoordinate::new(0, 0).distance_from_origin(), 0);
    }

    #[test]
    fn sides_towards_every_candidate_are_distinct_and_reversible() {
        let rect = Cartesian2DCoordinate::new(7, 2);
        for neighbour in rect.neighbour_candidates().iter() {
            let side = rect.side_towards(*neighbour).expect("candidate should be adjacent");
            assert_eq!(rect.neighbour_at(side), *neighbour);
            assert_eq!(neighbour.side_towards(rect), Some(side.opposite()));
        }

        let hex = AxialCoordinate::new(-2, 1);
        for neighbour in hex.neighbour_candidates().iter() {
            let side = hex.side_towards(*neighbour).expect("candidate should be adjacent");
            assert_eq!(hex.neighbour_at(side), *neighbour);
            assert_eq!(neighbour.side_towards(hex), Some(side.opposite()));
        }
    }

    #[test]
    fn side_towards_non_adjacent_is_none() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(gc(0, 0).side_towards(gc(0, 0)), None);
        assert_eq!(gc(0, 0).side_towards(gc(1, 1)), None);
        assert_eq!(gc(0, 0).side_towards(gc(2, 0)), None);

        let ac = |q, r| AxialCoordinate::new(q, r);
        assert_eq!(ac(0, 0).side_towards(ac(1, 1)), None);
        assert_eq!(ac(0, 0).side_towards(ac(-1, -1)), None);
        assert_eq!(ac(0, 0).side_towards(ac(0, 2)), None);
    }

    #[test]
    fn hex_side_geometry() {
        let origin = AxialCoordinate::new(0, 0);
        assert_eq!(origin.side_towards(AxialCoordinate::new(0, -1)), Some(HexSide::TopLeft));
        assert_eq!(origin.side_towards(AxialCoordinate::new(0, 1)), Some(HexSide::BottomRight));
        assert_eq!(origin.side_towards(AxialCoordinate::new(-1, 0)), Some(HexSide::Left));
        assert_eq!(origin.side_towards(AxialCoordinate::new(-1, 1)), Some(HexSide::BottomLeft));
        assert_eq!(origin.side_towards(AxialCoordinate::new(1, 0)), Some(HexSide::Right));
        assert_eq!(origin.side_towards(AxialCoordinate::new(1, -1)), Some(HexSide::TopRight));
    }

    #[test]
    fn axial_text_round_trip() {
        for &(q, r) in &[(0, 0), (1, -1), (-12, 34), (100, -250)] {
            let coord = AxialCoordinate::new(q, r);
            let text = coord.to_string();
            assert_eq!(text.parse::<AxialCoordinate>().unwrap(), coord);
        }
        assert_eq!(AxialCoordinate::new(-3, 2).to_string(), "{q: -3, r: 2}");
    }

    #[test]
    fn axial_text_malformed_input_fails() {
        let malformed = ["", "{}", "q: 1, r: 2", "{q: 1}", "{r: 1, q: 2}", "{q: 1, r: }",
                         "{q: x, r: 2}", "{q: 1, r: 2, s: -3}", "{q: --1, r: 2}", "{q: +1, r: 2}"];
        for text in &malformed {
            match text.parse::<AxialCoordinate>() {
                Err(Error(ErrorKind::MalformedCoordinate(ref t), _)) => assert_eq!(t.as_str(), *text),
                other => panic!("expected malformed coordinate error for {:?}, got {:?}", text, other),
            }
        }
    }
}
