use log::debug;
use rand::Rng;

use crate::analysis::PassageGraph;
use crate::errors::*;
use crate::generators;
use crate::grid_traits::MazeGrid;

/// A grid whose passages have been carved. Once wrapped the grid is only lent out
/// immutably, to renderers and analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze<G: MazeGrid> {
    grid: G,
    passages: usize,
}

impl<G: MazeGrid> Maze<G> {
    /// Carve a perfect maze into a freshly constructed grid.
    pub fn generate<R: Rng>(mut grid: G, rng: &mut R) -> Result<Maze<G>> {
        let passages = generators::recursive_backtracker(&mut grid, rng)?;
        Ok(Maze { grid, passages })
    }

    /// Wrap a grid that was carved by some other means, counting its open walls.
    pub fn from_generated_grid(grid: G) -> Result<Maze<G>> {
        let mut open_sides = 0;
        for coord in grid.iter() {
            open_sides += grid.cell(coord)?.open_sides().count();
        }
        // Every passage opens a side on both of its cells.
        Ok(Maze {
            grid,
            passages: open_sides / 2,
        })
    }

    #[inline]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.passages
    }

    pub fn passage_graph(&self) -> Result<PassageGraph<G::Coord>> {
        PassageGraph::new(&self.grid)
    }

    /// Fails with `ImperfectMaze` unless every cell is reachable from the start and
    /// there is exactly one route between any two cells.
    pub fn verify(&self) -> Result<()> {
        let graph = self.passage_graph()?;
        graph.verify_spanning_tree(self.grid.start())?;
        debug!("verified perfect maze of {} cells and {} passages",
               graph.cells_count(),
               graph.passages_count());
        Ok(())
    }

    pub fn is_perfect(&self) -> bool {
        self.verify().is_ok()
    }
}
