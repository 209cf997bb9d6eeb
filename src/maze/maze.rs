use crate::dims::Dims;

use super::{AdjacencyGraph, Grid, MazeError};

/// A grid together with its adjacency graph and the two endpoints.
///
/// The graph is derived once in the constructor and never changes afterwards,
/// so a `Maze` can be shared read-only between any number of solver calls.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    graph: AdjacencyGraph,
    start: Dims,
    end: Dims,
}

impl Maze {
    /// Builds the maze with the conventional endpoints `(1, 1)` and
    /// `(width - 2, height - 2)`.
    ///
    /// The endpoints are not checked, a blocked or out of bounds endpoint
    /// simply makes the maze unsolvable.
    pub fn new(grid: Grid) -> Self {
        let graph = AdjacencyGraph::from_grid(&grid);
        let Dims(w, h) = grid.size();

        Maze {
            grid,
            graph,
            start: Dims(1, 1),
            end: Dims(w - 2, h - 2),
        }
    }

    /// Replaces the endpoints, both of which must be open cells.
    pub fn with_endpoints(self, start: Dims, end: Dims) -> Result<Self, MazeError> {
        for pos in [start, end] {
            if !self.graph.contains(pos) {
                return Err(MazeError::InvalidEndpoint(pos));
            }
        }

        Ok(Maze { start, end, ..self })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    pub fn size(&self) -> Dims {
        self.grid.size()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}
