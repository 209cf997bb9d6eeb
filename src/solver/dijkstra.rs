use crate::{dims::Dims, maze::Maze};

use super::{resolve_endpoints, MinQueue, Predecessors, ProgressSink, SolveOptions, Solver, Tracker};

/// Cost of a single step between adjacent cells.
pub(crate) const STEP_COST: usize = 1;

/// Dijkstra's algorithm.
///
/// With uniform step costs it visits cells in the same layers as [`Bfs`](super::Bfs),
/// the general relaxation is kept so the cost function is the only thing to
/// change for weighted terrain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Solver for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let mut prev = Predecessors::new(graph.capacity(), start);
        let mut distances = vec![usize::MAX; graph.capacity()];
        let mut heap = MinQueue::new();

        distances[start] = 0;
        heap.push(0, start);

        while let Some((dist, node)) = heap.pop() {
            if node == end {
                return tracker.finish(prev.path_to(maze, node));
            }

            // stale entry, the node was reached cheaper since
            if dist > distances[node] {
                continue;
            }

            for &neighbor in graph.neighbors_of(node) {
                let new_dist = distances[node] + STEP_COST;

                if new_dist < distances[neighbor] {
                    let discovered = distances[neighbor] == usize::MAX;
                    distances[neighbor] = new_dist;
                    heap.push(new_dist, neighbor);
                    prev.insert(neighbor, node);
                    if discovered {
                        tracker.visit(graph.pos(neighbor));
                    }
                }
            }
        }

        tracker.finish(Vec::new())
    }
}
