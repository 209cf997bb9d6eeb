pub mod cell;
pub mod graph;
pub mod grid;
#[allow(clippy::module_inception)]
pub mod maze;

pub use cell::{Cell, Way};
pub use graph::{AdjacencyGraph, ContractedGraph};
pub use grid::Grid;
pub use maze::Maze;

use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {0:?}")]
    InvalidDimensions(Dims),
    #[error("endpoint {0:?} is outside the maze or on a blocked cell")]
    InvalidEndpoint(Dims),
}
