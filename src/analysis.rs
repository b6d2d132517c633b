use error_chain::bail;
use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

use crate::coordinates::Coordinate;
use crate::errors::*;
use crate::grid_traits::MazeGrid;
use crate::utils::{self, FnvHashMap, FnvHashSet};

/// The passages of a carved grid as an undirected graph: one node per cell and one edge
/// per pair of adjacent cells with the wall between them knocked down.
///
/// The graph is a snapshot. Further changes to the grid are not reflected in it.
#[derive(Debug, Clone)]
pub struct PassageGraph<CoordT: Coordinate> {
    graph: UnGraph<CoordT, ()>,
    node_indices: FnvHashMap<CoordT, NodeIndex>,
}

impl<CoordT: Coordinate> PassageGraph<CoordT> {
    pub fn new<G>(grid: &G) -> Result<PassageGraph<CoordT>>
        where G: MazeGrid<Coord = CoordT>
    {
        let cells_count = grid.size();
        let mut graph = UnGraph::with_capacity(cells_count, cells_count.saturating_sub(1));
        let mut node_indices = utils::fnv_hashmap(cells_count);

        for coord in grid.iter() {
            node_indices.insert(coord, graph.add_node(coord));
        }

        for coord in grid.iter() {
            for &neighbour in grid.neighbours(coord).iter() {
                // Each wall is seen from both sides, only add the edge once.
                if coord < neighbour && grid.in_grid(neighbour) &&
                   grid.is_wall_open(coord, neighbour) {
                    let a = node_index(&node_indices, coord)?;
                    let b = node_index(&node_indices, neighbour)?;
                    graph.add_edge(a, b, ());
                }
            }
        }

        Ok(PassageGraph {
            graph,
            node_indices,
        })
    }

    #[inline]
    pub fn cells_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn connected_components(&self) -> usize {
        algo::connected_components(&self.graph)
    }

    pub fn has_cycle(&self) -> bool {
        algo::is_cyclic_undirected(&self.graph)
    }

    /// Every cell reachable by walking through passages from `start`, `start` included.
    pub fn reachable_from(&self, start: CoordT) -> Result<FnvHashSet<CoordT>> {
        let start_index = node_index(&self.node_indices, start)?;
        let mut reachable = utils::fnv_hashset(self.cells_count());

        let mut bfs = Bfs::new(&self.graph, start_index);
        while let Some(node) = bfs.next(&self.graph) {
            reachable.insert(self.graph[node]);
        }
        Ok(reachable)
    }

    /// Check the passages form a spanning tree: every cell is reachable from `start`
    /// and there are no loops.
    pub fn verify_spanning_tree(&self, start: CoordT) -> Result<()> {
        let reachable = self.reachable_from(start)?.len();
        if reachable != self.cells_count() {
            bail!(ErrorKind::ImperfectMaze(format!("only {} of {} cells are reachable from {}",
                                                   reachable,
                                                   self.cells_count(),
                                                   start)));
        }
        if self.passages_count() + 1 != self.cells_count() || self.has_cycle() {
            bail!(ErrorKind::ImperfectMaze(format!("{} passages between {} cells form a loop",
                                                   self.passages_count(),
                                                   self.cells_count())));
        }
        Ok(())
    }
}

fn node_index<CoordT: Coordinate>(node_indices: &FnvHashMap<CoordT, NodeIndex>,
                                  coord: CoordT)
                                  -> Result<NodeIndex> {
    node_indices.get(&coord)
        .cloned()
        .ok_or_else(|| ErrorKind::InvalidGridCoordinate(coord.to_string()).into())
}
