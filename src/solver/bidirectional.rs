use std::collections::VecDeque;

use crate::{dims::Dims, maze::Maze};

use super::{resolve_endpoints, Predecessors, ProgressSink, SolveOptions, Solver, Tracker};

/// Two breadth-first searches, one from each end, meeting in the middle.
///
/// Each round pops a single cell from the forward queue and then a single
/// cell from the backward one. This keeps the layers in sync only when both
/// frontiers grow equally, so the first meeting point does not always give the
/// shortest path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bidirectional;

impl Solver for Bidirectional {
    fn name(&self) -> &'static str {
        "bidirectional"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let mut forward = Predecessors::new(graph.capacity(), start);
        let mut backward = Predecessors::new(graph.capacity(), end);
        let mut forward_queue = VecDeque::from([start]);
        let mut backward_queue = VecDeque::from([end]);

        while !forward_queue.is_empty() && !backward_queue.is_empty() {
            if let Some(node) = forward_queue.pop_front() {
                for &neighbor in graph.neighbors_of(node) {
                    if backward.is_seen(neighbor) {
                        return tracker.finish(join(maze, &forward, node, &backward, neighbor));
                    }

                    if !forward.is_seen(neighbor) {
                        forward_queue.push_back(neighbor);
                        forward.insert(neighbor, node);
                        tracker.visit(graph.pos(neighbor));
                    }
                }
            }

            if let Some(node) = backward_queue.pop_front() {
                for &neighbor in graph.neighbors_of(node) {
                    if forward.is_seen(neighbor) {
                        return tracker.finish(join(maze, &forward, neighbor, &backward, node));
                    }

                    if !backward.is_seen(neighbor) {
                        backward_queue.push_back(neighbor);
                        backward.insert(neighbor, node);
                        tracker.visit(graph.pos(neighbor));
                    }
                }
            }
        }

        tracker.finish(Vec::new())
    }
}

/// Start to `meet_forward`, then `meet_backward` to end. The two meeting cells are adjacent.
fn join(
    maze: &Maze,
    forward: &Predecessors,
    meet_forward: usize,
    backward: &Predecessors,
    meet_backward: usize,
) -> Vec<Dims> {
    let mut path = forward.path_to(maze, meet_forward);
    path.extend(
        backward
            .chain(meet_backward)
            .into_iter()
            .map(|i| maze.graph().pos(i)),
    );
    path
}
