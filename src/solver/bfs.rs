use std::collections::VecDeque;

use crate::{dims::Dims, maze::Maze};

use super::{resolve_endpoints, Predecessors, ProgressSink, SolveOptions, Solver, Tracker};

/// Breadth-first search, finds a shortest path in number of steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Solver for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let mut prev = Predecessors::new(graph.capacity(), start);
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            if node == end {
                return tracker.finish(prev.path_to(maze, node));
            }

            for &neighbor in graph.neighbors_of(node) {
                if !prev.is_seen(neighbor) {
                    queue.push_back(neighbor);
                    prev.insert(neighbor, node);
                    tracker.visit(graph.pos(neighbor));
                }
            }
        }

        tracker.finish(Vec::new())
    }
}
