use rand::Rng as _;
use smallvec::SmallVec;

use crate::{
    algorithms::{rng_from_seed, Params},
    dims::Dims,
    maze::Maze,
};

use super::{resolve_endpoints, ProgressSink, SolveOptions, Solver, Tracker};

/// Random walk that backtracks out of dead ends.
///
/// At each cell it moves to a random unvisited neighbor, or steps back along
/// its path when there is none. The walk ends with the current path once it
/// stands on the end, or with an empty path when it had to backtrack past the
/// start.
///
/// Without `max_steps` the walk runs until one of those happens. Callers that
/// need a bound on the work, for example on unsolvable mazes, should set one;
/// running out of steps gives an empty path.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalk {
    max_steps: Option<usize>,
    seed: Option<u64>,
}

impl RandomWalk {
    /// Reads `max_steps` and `seed`.
    pub fn from_params(params: &Params) -> Self {
        Self {
            max_steps: params.optional("max_steps"),
            seed: params.optional("seed"),
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }
}

impl Solver for RandomWalk {
    fn name(&self) -> &'static str {
        "random"
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        let mut tracker = Tracker::new(self.name(), options, sink);
        let (start, end) = match resolve_endpoints(maze) {
            Ok(endpoints) => endpoints,
            Err(path) => return tracker.finish(path),
        };

        let graph = maze.graph();
        let mut rng = rng_from_seed(self.seed);
        let mut visited = vec![false; graph.capacity()];
        let mut path = vec![start];
        let mut steps = 0;

        visited[start] = true;
        tracker.record(maze.start());

        while let Some(&current) = path.last() {
            if current == end {
                let path = path.into_iter().map(|i| graph.pos(i)).collect();
                return tracker.finish(path);
            }

            if self.max_steps.is_some_and(|max| steps >= max) {
                log::warn!("Random walk gave up after {} steps", steps);
                return tracker.finish(Vec::new());
            }
            steps += 1;

            let candidates: SmallVec<[usize; 4]> = graph
                .neighbors_of(current)
                .iter()
                .copied()
                .filter(|&n| !visited[n])
                .collect();

            let next = match candidates.len() {
                0 => {
                    path.pop();
                    continue;
                }
                1 => candidates[0],
                len => candidates[rng.gen_range(0..len)],
            };

            path.push(next);
            visited[next] = true;
            tracker.visit(graph.pos(next));
        }

        tracker.finish(Vec::new())
    }
}
