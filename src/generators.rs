use log::{debug, trace};
use rand::Rng;
use smallvec::SmallVec;

use crate::errors::*;
use crate::grid_traits::MazeGrid;

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// Starting from the grid's start cell, repeatedly step to a random neighbour that has
/// never been visited, knocking down the wall between the two. On reaching a dead end,
/// back up along the path taken until a cell with an unvisited neighbour turns up.
/// Every cell gets visited and no cell is visited twice, so the passages form a spanning
/// tree: a perfect maze with exactly one route between any two cells.
///
/// The "recursion" is an explicit stack so that deep mazes cannot overflow the call stack.
/// A cell counts as unvisited while it still has all of its walls, no other bookkeeping
/// is kept. The grid is expected to be freshly built with every wall standing.
///
/// Returns the number of walls knocked down, which is `grid.size() - 1` on success.
pub fn recursive_backtracker<G, R>(grid: &mut G, rng: &mut R) -> Result<usize>
    where G: MazeGrid,
          R: Rng
{
    let start = grid.start();
    grid.cell(start).chain_err(|| "start cell is not part of the grid")?;

    let mut stack = vec![start];
    let mut passages = 0;
    let mut max_stack_depth: usize = 1;

    while let Some(position) = stack.pop() {

        let mut unvisited_neighbours = SmallVec::<[G::Coord; 6]>::new();
        for &candidate in grid.neighbours(position).iter() {
            if grid.in_grid(candidate) && grid.cell(candidate)?.has_all_sides() {
                unvisited_neighbours.push(candidate);
            }
        }

        if !unvisited_neighbours.is_empty() {
            let next = unvisited_neighbours[rng.gen_range(0..unvisited_neighbours.len())];
            trace!("carving passage {} -> {}", position, next);

            grid.break_wall_between(position, next)?;
            passages += 1;

            stack.push(position);
            stack.push(next);
            max_stack_depth = max_stack_depth.max(stack.len());
        }
    }

    debug!("recursive backtracker carved {} passages over {} cells, max stack depth {}",
           passages,
           grid.size(),
           max_stack_depth);
    Ok(passages)
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::{CellSide, HexSide, RectSide};
    use crate::coordinates::{AxialCoordinate, Cartesian2DCoordinate, Coordinate};
    use crate::hexgrid::HexGrid;
    use crate::rectgrid::RectGrid;
    use crate::units::{Height, Radius, Width};
    use crate::utils;

    fn seeded_rng(seed: u64) -> XorShiftRng {
        XorShiftRng::seed_from_u64(seed)
    }

    // Depth first walk over open walls from the start cell.
    fn reachable_count<G: MazeGrid>(grid: &G) -> usize {
        let mut seen = utils::fnv_hashset(grid.size());
        let mut pending = vec![grid.start()];
        while let Some(coord) = pending.pop() {
            if seen.insert(coord) {
                for &n in grid.neighbours(coord).iter() {
                    if grid.is_wall_open(coord, n) {
                        pending.push(n);
                    }
                }
            }
        }
        seen.len()
    }

    fn removed_sides_total<G: MazeGrid>(grid: &G) -> usize {
        grid.iter()
            .map(|coord| grid.cell(coord).unwrap().open_sides().count())
            .sum()
    }

    fn sides_counts<G: MazeGrid>(grid: &G) -> utils::FnvHashMap<G::Coord, usize> {
        grid.iter()
            .map(|coord| (coord, grid.cell(coord).unwrap().sides_count()))
            .collect()
    }

    fn assert_no_side_count_grows<G: MazeGrid>(before: &utils::FnvHashMap<G::Coord, usize>,
                                               grid: &G) {
        assert_eq!(before.len(), grid.size());
        for coord in grid.iter() {
            let after = grid.cell(coord).unwrap().sides_count();
            assert!(after <= before[&coord],
                    "cell {} went from {} to {} sides",
                    coord,
                    before[&coord],
                    after);
        }
    }

    #[test]
    fn no_cell_gains_sides_during_generation() {
        for seed in 0..5 {
            let mut rect = RectGrid::new(Width(9), Height(7)).unwrap();
            let rect_before = sides_counts(&rect);
            recursive_backtracker(&mut rect, &mut seeded_rng(seed)).unwrap();
            assert_no_side_count_grows(&rect_before, &rect);

            let mut hex = HexGrid::new(Radius(4)).unwrap();
            let hex_before = sides_counts(&hex);
            recursive_backtracker(&mut hex, &mut seeded_rng(seed)).unwrap();
            assert_no_side_count_grows(&hex_before, &hex);
        }
    }

    #[test]
    fn two_by_one_rect_has_single_passage() {
        let mut g = RectGrid::new(Width(2), Height(1)).unwrap();
        let passages = recursive_backtracker(&mut g, &mut seeded_rng(7)).unwrap();
        assert_eq!(passages, 1);

        let left = g.cell(Cartesian2DCoordinate::new(0, 0)).unwrap();
        let right = g.cell(Cartesian2DCoordinate::new(1, 0)).unwrap();
        assert_eq!(left.sides().collect::<Vec<_>>(),
                   vec![RectSide::Top, RectSide::Bottom, RectSide::Left]);
        assert_eq!(right.sides().collect::<Vec<_>>(),
                   vec![RectSide::Top, RectSide::Right, RectSide::Bottom]);
    }

    #[test]
    fn radius_one_hex_connects_all_seven_cells() {
        let mut g = HexGrid::new(Radius(1)).unwrap();
        let passages = recursive_backtracker(&mut g, &mut seeded_rng(1234)).unwrap();
        assert_eq!(passages, 6);
        assert_eq!(removed_sides_total(&g), 12);
        assert_eq!(reachable_count(&g), 7);

        let centre = g.cell(AxialCoordinate::new(0, 0)).unwrap();
        assert!(!centre.has_all_sides());
        assert!(centre.open_sides().all(|side| {
            g.is_neighbour_open(AxialCoordinate::new(0, 0), side) && side != side.opposite()
        }));
        assert_eq!(HexSide::ALL.len(), 6);
    }

    #[test]
    fn single_cell_grids_carve_nothing() {
        let mut rect = RectGrid::new(Width(1), Height(1)).unwrap();
        assert_eq!(recursive_backtracker(&mut rect, &mut seeded_rng(0)).unwrap(), 0);
        assert!(rect.cell(rect.start()).unwrap().has_all_sides());

        let mut hex = HexGrid::new(Radius(0)).unwrap();
        assert_eq!(recursive_backtracker(&mut hex, &mut seeded_rng(0)).unwrap(), 0);
        assert!(hex.cell(hex.start()).unwrap().has_all_sides());
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = RectGrid::new(Width(12), Height(9)).unwrap();
        let mut b = RectGrid::new(Width(12), Height(9)).unwrap();
        recursive_backtracker(&mut a, &mut seeded_rng(42)).unwrap();
        recursive_backtracker(&mut b, &mut seeded_rng(42)).unwrap();
        assert_eq!(a, b);

        let mut c = HexGrid::new(Radius(4)).unwrap();
        let mut d = HexGrid::new(Radius(4)).unwrap();
        recursive_backtracker(&mut c, &mut seeded_rng(42)).unwrap();
        recursive_backtracker(&mut d, &mut seeded_rng(42)).unwrap();
        assert_eq!(c, d);
    }

    #[test]
    fn walls_on_the_grid_boundary_stay_up() {
        let mut g = RectGrid::new(Width(6), Height(4)).unwrap();
        recursive_backtracker(&mut g, &mut seeded_rng(99)).unwrap();
        for coord in g.iter() {
            let cell = g.cell(coord).unwrap();
            for side in RectSide::ALL.iter().cloned() {
                let across = coord.neighbour_at(side);
                if !g.in_grid(across) {
                    assert!(cell.has_side(side));
                }
            }
        }
    }

    #[test]
    fn rect_backtracker_is_a_spanning_tree() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (w as usize % 20 + 1, h as usize % 20 + 1);
            let mut g = RectGrid::new(Width(w), Height(h)).unwrap();
            let passages = recursive_backtracker(&mut g, &mut seeded_rng(seed)).unwrap();

            let every_cell_visited = g.iter().all(|coord| {
                g.size() == 1 || !g.cell(coord).unwrap().has_all_sides()
            });
            TestResult::from_bool(passages == w * h - 1 &&
                                  removed_sides_total(&g) == 2 * passages &&
                                  every_cell_visited &&
                                  reachable_count(&g) == w * h)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn hex_backtracker_is_a_spanning_tree() {
        fn p(radius: u8, seed: u64) -> TestResult {
            let radius = radius as usize % 10;
            let mut g = HexGrid::new(Radius(radius)).unwrap();
            let cells_count = 3 * radius * (radius + 1) + 1;
            let passages = recursive_backtracker(&mut g, &mut seeded_rng(seed)).unwrap();

            TestResult::from_bool(g.size() == cells_count && passages == cells_count - 1 &&
                                  removed_sides_total(&g) == 2 * passages &&
                                  reachable_count(&g) == cells_count)
        }
        quickcheck(p as fn(u8, u64) -> TestResult);
    }
}
