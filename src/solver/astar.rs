use crate::{dims::Dims, maze::Maze};

use super::{
    dijkstra::STEP_COST, resolve_endpoints, MinQueue, Predecessors, ProgressSink, SolveOptions,
    Solver, Tracker,
};

/// A* search guided by the Manhattan distance to the end.
///
/// The estimate never overestimates on a 4-connected grid with unit steps, so
/// the path is a shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

pub(crate) fn heuristic(pos: Dims, end: Dims) -> usize {
    pos.manhattan(end) as usize
}

impl Solver for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let target = maze.end();
        let mut prev = Predecessors::new(graph.capacity(), start);
        let mut distances = vec![usize::MAX; graph.capacity()];
        let mut heap = MinQueue::new();

        distances[start] = 0;
        heap.push(0, start);

        while let Some((priority, node)) = heap.pop() {
            if node == end {
                return tracker.finish(prev.path_to(maze, node));
            }

            let node_pos = graph.pos(node);
            if priority > distances[node] + heuristic(node_pos, target) {
                continue;
            }

            for &neighbor in graph.neighbors_of(node) {
                let new_dist = distances[node] + STEP_COST;

                if new_dist < distances[neighbor] {
                    let discovered = distances[neighbor] == usize::MAX;
                    let neighbor_pos = graph.pos(neighbor);
                    distances[neighbor] = new_dist;
                    heap.push(new_dist + heuristic(neighbor_pos, target), neighbor);
                    prev.insert(neighbor, node);
                    if discovered {
                        tracker.visit(neighbor_pos);
                    }
                }
            }
        }

        tracker.finish(Vec::new())
    }
}
