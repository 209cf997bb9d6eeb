//! Rectangular grid mazes and the graph searches that solve them.
//!
//! A [`Maze`] owns a [`Grid`](maze::Grid) of blocked and open cells, the
//! [`AdjacencyGraph`](maze::AdjacencyGraph) derived from it and two endpoints.
//! Mazes come from the generators in [`algorithms`] and are solved by any
//! [`Solver`](solver::Solver) from [`solver`].
//!
//! ```
//! use gridmaze::{algorithms::generate_backtrack, solver::{Solver, Strategy}};
//!
//! let maze = generate_backtrack(21, 21, Some(7)).unwrap();
//! let path = Strategy::AStar.solve_quiet(&maze);
//! assert_eq!(path.first(), Some(&maze.start()));
//! assert_eq!(path.last(), Some(&maze.end()));
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod maze;
pub mod registry;
pub mod solver;

pub use dims::Dims;
pub use maze::{Maze, MazeError};
