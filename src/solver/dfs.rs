use crate::{dims::Dims, maze::Maze};

use super::{resolve_endpoints, Predecessors, ProgressSink, SolveOptions, Solver, Tracker};

/// Depth-first search.
///
/// Vertices are marked when pushed, not when popped, so the path follows the
/// first discovery of each vertex and is usually not the shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Solver for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let mut prev = Predecessors::new(graph.capacity(), start);
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if node == end {
                return tracker.finish(prev.path_to(maze, node));
            }

            for &neighbor in graph.neighbors_of(node) {
                if !prev.is_seen(neighbor) {
                    stack.push(neighbor);
                    prev.insert(neighbor, node);
                    tracker.visit(graph.pos(neighbor));
                }
            }
        }

        tracker.finish(Vec::new())
    }
}
