use crate::{dims::Dims, maze::Maze};

use super::{resolve_endpoints, MinQueue, Predecessors, ProgressSink, SolveOptions, Solver, Tracker};

/// Greedy best-first search.
///
/// A neighbor is scored with the score of the cell it was reached from plus
/// the Manhattan distance of the step between them. Nothing guarantees the
/// path to be the shortest one.
///
/// Unlike the other strategies, steps are reported when a cell is popped from
/// the queue, together with every cell discovered so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Solver for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let mut prev = Predecessors::new(graph.capacity(), start);
        let mut scores = vec![usize::MAX; graph.capacity()];
        let mut open = MinQueue::new();

        scores[start] = 0;
        open.push(0, start);
        tracker.record(maze.start());

        while let Some((_, current)) = open.pop() {
            let current_pos = graph.pos(current);
            tracker.notify(current_pos);

            if current == end {
                return tracker.finish(prev.path_to(maze, current));
            }

            for &neighbor in graph.neighbors_of(current) {
                let neighbor_pos = graph.pos(neighbor);
                let tentative = scores[current] + current_pos.manhattan(neighbor_pos) as usize;

                if tentative < scores[neighbor] {
                    if scores[neighbor] == usize::MAX {
                        tracker.record(neighbor_pos);
                    }
                    prev.insert(neighbor, current);
                    scores[neighbor] = tentative;
                    open.push(tentative, neighbor);
                }
            }
        }

        tracker.finish(Vec::new())
    }
}
