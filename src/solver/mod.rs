//! Path searches over the adjacency graph of a [`Maze`].
//!
//! Every strategy implements [`Solver`] and returns the path from the maze's
//! start to its end, both included, or an empty `Vec` if there is none.
//!
//! | Strategy | Frontier | Shortest path |
//! |---|---|---|
//! | [`Bfs`] | FIFO queue | yes |
//! | [`Dfs`] | LIFO stack | no |
//! | [`Dijkstra`] | min-heap on distance | yes |
//! | [`AStar`] | min-heap on distance + Manhattan estimate | yes |
//! | [`Bidirectional`] | two FIFO queues, one pop per side per round | no, first meeting point |
//! | [`RandomWalk`] | path stack with backtracking | no |
//! | [`Greedy`] | min-heap on accumulated heuristic score | no |
//!
//! Ties in the heap based strategies are broken by insertion order, so all of
//! them except [`RandomWalk`] are deterministic.

pub mod astar;
pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;
pub mod greedy;
pub mod random_walk;

use std::{cmp::Ordering, collections::BinaryHeap, fmt, str::FromStr, sync::Arc};

use thiserror::Error;

use crate::{algorithms::Params, dims::Dims, maze::Maze, registry::Registry};

pub use astar::AStar;
pub use bfs::Bfs;
pub use bidirectional::Bidirectional;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use greedy::Greedy;
pub use random_walk::RandomWalk;

/// Observer of a running search.
///
/// Notifications are side effects only, a solver produces the same path with
/// any sink.
pub trait ProgressSink {
    /// Called whenever `current` becomes visited. `visited` holds every vertex
    /// visited so far, in visiting order.
    fn on_step(&mut self, current: Dims, visited: &[Dims]) {
        let _ = (current, visited);
    }

    /// Called once with the final path when the search succeeds.
    fn on_solution(&mut self, path: &[Dims]) {
        let _ = path;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {}

impl ProgressSink for () {}

/// Sink that traces every notification through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn on_step(&mut self, current: Dims, visited: &[Dims]) {
        log::trace!("visited {:?} ({} so far)", current, visited.len());
    }

    fn on_solution(&mut self, path: &[Dims]) {
        log::trace!("solution of {} cells", path.len());
    }
}

/// Sink that keeps everything it is told.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub steps: Vec<Dims>,
    pub visited: Vec<Dims>,
    pub solution: Option<Vec<Dims>>,
}

impl ProgressSink for Recorder {
    fn on_step(&mut self, current: Dims, visited: &[Dims]) {
        self.steps.push(current);
        self.visited.clear();
        self.visited.extend_from_slice(visited);
    }

    fn on_solution(&mut self, path: &[Dims]) {
        self.solution = Some(path.to_vec());
    }
}

/// Which notifications a solver sends to its [`ProgressSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub report_steps: bool,
    pub report_solution: bool,
}

impl SolveOptions {
    pub const QUIET: SolveOptions = SolveOptions::new(false, false);
    pub const ALL: SolveOptions = SolveOptions::new(true, true);

    pub const fn new(report_steps: bool, report_solution: bool) -> Self {
        Self {
            report_steps,
            report_solution,
        }
    }
}

pub trait Solver: fmt::Debug + Sync + Send {
    fn name(&self) -> &'static str;

    /// Searches a path from `maze.start()` to `maze.end()`.
    ///
    /// Returns an empty `Vec` when no path exists, including when one of the
    /// endpoints is blocked or outside the grid.
    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims>;

    /// Solves without any notifications.
    fn solve_quiet(&self, maze: &Maze) -> Vec<Dims> {
        self.solve(maze, SolveOptions::QUIET, &mut NoopSink)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}'")]
pub struct UnknownStrategy(pub String);

/// Tagged selection of the built-in strategies, dispatching to their default
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Bidirectional,
    RandomWalk,
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::Bidirectional,
        Strategy::RandomWalk,
        Strategy::Greedy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "a_star",
            Strategy::Bidirectional => "bidirectional",
            Strategy::RandomWalk => "random",
            Strategy::Greedy => "greedy",
        }
    }

    /// Whether two solves of the same maze always give the same path.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Strategy::RandomWalk)
    }

    /// Whether the returned path is always a shortest one.
    pub fn is_optimal(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::Dijkstra | Strategy::AStar)
    }

    /// The strategy as a standalone solver configured from `params`.
    pub fn solver(self, params: &Params) -> Arc<dyn Solver> {
        match self {
            Strategy::Bfs => Arc::new(Bfs),
            Strategy::Dfs => Arc::new(Dfs),
            Strategy::Dijkstra => Arc::new(Dijkstra),
            Strategy::AStar => Arc::new(AStar),
            Strategy::Bidirectional => Arc::new(Bidirectional),
            Strategy::RandomWalk => Arc::new(RandomWalk::from_params(params)),
            Strategy::Greedy => Arc::new(Greedy),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

impl Solver for Strategy {
    fn name(&self) -> &'static str {
        Strategy::name(*self)
    }

    fn solve(&self, maze: &Maze, options: SolveOptions, sink: &mut dyn ProgressSink) -> Vec<Dims> {
        match self {
            Strategy::Bfs => Bfs.solve(maze, options, sink),
            Strategy::Dfs => Dfs.solve(maze, options, sink),
            Strategy::Dijkstra => Dijkstra.solve(maze, options, sink),
            Strategy::AStar => AStar.solve(maze, options, sink),
            Strategy::Bidirectional => Bidirectional.solve(maze, options, sink),
            Strategy::RandomWalk => RandomWalk::default().solve(maze, options, sink),
            Strategy::Greedy => Greedy.solve(maze, options, sink),
        }
    }
}

/// Registry of the solvers, keyed by strategy name.
pub type SolverRegistry = Registry<Arc<dyn Solver>>;

impl SolverRegistry {
    /// Every built-in strategy under its [`Strategy::name`], `bfs` being the default.
    pub fn builtin(params: &Params) -> Self {
        let mut registry = Registry::with_default(Strategy::Bfs.solver(params));
        for strategy in Strategy::ALL {
            registry.register(strategy.name().to_string(), strategy.solver(params));
        }
        registry
    }
}

/// Checks that `path` walks from the maze's start to its end through adjacent
/// open cells.
pub fn is_valid_path(maze: &Maze, path: &[Dims]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };

    first == maze.start()
        && last == maze.end()
        && maze.graph().contains(first)
        && path.windows(2).all(|w| maze.graph().is_adjacent(w[0], w[1]))
}

/// Resolves the endpoints to vertex indices.
///
/// `Err` carries the answer when no search is needed: an empty path for
/// endpoints that are not vertices, `[start]` when both are the same vertex.
pub(crate) fn resolve_endpoints(maze: &Maze) -> Result<(usize, usize), Vec<Dims>> {
    let graph = maze.graph();
    let (Some(start), Some(end)) = (graph.index(maze.start()), graph.index(maze.end())) else {
        return Err(Vec::new());
    };

    if start == end {
        return Err(vec![maze.start()]);
    }

    Ok((start, end))
}

/// Bookkeeping of notifications shared by all solvers.
pub(crate) struct Tracker<'s> {
    name: &'static str,
    options: SolveOptions,
    sink: &'s mut dyn ProgressSink,
    visited: Vec<Dims>,
}

impl<'s> Tracker<'s> {
    pub(crate) fn new(
        name: &'static str,
        options: SolveOptions,
        sink: &'s mut dyn ProgressSink,
    ) -> Self {
        Self {
            name,
            options,
            sink,
            visited: Vec::new(),
        }
    }

    /// Records `pos` as visited and notifies the sink.
    pub(crate) fn visit(&mut self, pos: Dims) {
        if self.options.report_steps {
            self.visited.push(pos);
            self.sink.on_step(pos, &self.visited);
        }
    }

    /// Records `pos` as visited without a notification.
    pub(crate) fn record(&mut self, pos: Dims) {
        if self.options.report_steps {
            self.visited.push(pos);
        }
    }

    /// Notifies the sink about `current` with everything recorded so far.
    pub(crate) fn notify(&mut self, current: Dims) {
        if self.options.report_steps {
            self.sink.on_step(current, &self.visited);
        }
    }

    pub(crate) fn finish(self, path: Vec<Dims>) -> Vec<Dims> {
        if path.is_empty() {
            log::debug!("{}: no path", self.name);
        } else {
            log::debug!("{}: path of {} cells", self.name, path.len());
            if self.options.report_solution {
                self.sink.on_solution(&path);
            }
        }
        path
    }
}

/// Predecessor map over vertex indices.
pub(crate) struct Predecessors {
    prev: Vec<usize>,
}

impl Predecessors {
    const UNSEEN: usize = usize::MAX;
    const ROOT: usize = usize::MAX - 1;

    pub(crate) fn new(capacity: usize, root: usize) -> Self {
        let mut prev = vec![Self::UNSEEN; capacity];
        prev[root] = Self::ROOT;
        Self { prev }
    }

    pub(crate) fn is_seen(&self, idx: usize) -> bool {
        self.prev[idx] != Self::UNSEEN
    }

    pub(crate) fn insert(&mut self, idx: usize, from: usize) {
        self.prev[idx] = from;
    }

    /// Vertices from `idx` back to the root, both included.
    pub(crate) fn chain(&self, mut idx: usize) -> Vec<usize> {
        let mut chain = vec![idx];
        while let Some(&prev) = self.prev.get(idx) {
            if prev == Self::ROOT || prev == Self::UNSEEN {
                break;
            }
            chain.push(prev);
            idx = prev;
        }
        chain
    }

    /// Path from the root to `idx`.
    pub(crate) fn path_to(&self, maze: &Maze, idx: usize) -> Vec<Dims> {
        let graph = maze.graph();
        self.chain(idx).into_iter().rev().map(|i| graph.pos(i)).collect()
    }
}

/// Min-queue of vertex indices keyed by a cost, equal keys pop in insertion order.
pub(crate) struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
    seq: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    key: usize,
    seq: usize,
    idx: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed, `BinaryHeap` is a max-heap
        (other.key, other.seq).cmp(&(self.key, self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl MinQueue {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, key: usize, idx: usize) {
        self.heap.push(QueueEntry {
            key,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
    }

    /// Pops the `(key, idx)` pair with the lowest key.
    pub(crate) fn pop(&mut self) -> Option<(usize, usize)> {
        self.heap.pop().map(|e| (e.key, e.idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::{generate_backtrack, generate_empty},
        maze::{Cell, Grid},
    };

    fn solvers() -> Vec<Arc<dyn Solver>> {
        let params = Params::new().with("seed", 3);
        Strategy::ALL.iter().map(|s| s.solver(&params)).collect()
    }

    #[test]
    fn empty_room_scenario() {
        let maze = generate_empty(5, 5).unwrap();
        assert_eq!(maze.start(), Dims(1, 1));
        assert_eq!(maze.end(), Dims(3, 3));

        let path = Bfs.solve_quiet(&maze);
        assert_eq!(path.len(), 5);
        assert!(is_valid_path(&maze, &path));
        // right comes first in graph order
        assert_eq!(path, vec![Dims(1, 1), Dims(2, 1), Dims(3, 1), Dims(3, 2), Dims(3, 3)]);

        for solver in solvers() {
            let path = solver.solve_quiet(&maze);
            assert!(is_valid_path(&maze, &path), "{}", solver.name());
        }
    }

    #[test]
    fn blocked_end_is_unsolvable() {
        let mut grid = generate_empty(5, 5).unwrap().grid().clone();
        grid.set(Dims(3, 3), Cell::Blocked);
        let maze = Maze::new(grid);

        for solver in solvers() {
            assert_eq!(solver.solve_quiet(&maze), Vec::<Dims>::new(), "{}", solver.name());
        }
    }

    #[test]
    fn walled_off_end_is_unsolvable() {
        let grid = Grid::from_rows(&[
            "#######", //
            "#...#.#", //
            "#...#.#", //
            "#...#.#", //
            "#######", //
        ])
        .unwrap();
        let maze = Maze::new(grid);
        assert_eq!(maze.end(), Dims(5, 3));

        let bounded = RandomWalk::default().with_max_steps(1_000);
        assert!(bounded.solve_quiet(&maze).is_empty());

        for strategy in Strategy::ALL.into_iter().filter(|&s| s != Strategy::RandomWalk) {
            assert!(strategy.solve_quiet(&maze).is_empty(), "{}", strategy);
        }
    }

    #[test]
    fn start_equals_end() {
        let grid = Grid::from_rows(&["###", "#.#", "###"]).unwrap();
        let maze = Maze::new(grid);
        assert_eq!(maze.start(), maze.end());

        for solver in solvers() {
            let mut recorder = Recorder::default();
            let path = solver.solve(&maze, SolveOptions::ALL, &mut recorder);
            assert_eq!(path, vec![Dims(1, 1)], "{}", solver.name());
            assert_eq!(recorder.solution, Some(vec![Dims(1, 1)]));
        }

        let room = generate_empty(7, 7)
            .unwrap()
            .with_endpoints(Dims(3, 3), Dims(3, 3))
            .unwrap();
        for solver in solvers() {
            assert_eq!(solver.solve_quiet(&room), vec![Dims(3, 3)], "{}", solver.name());
        }
    }

    #[test]
    fn no_open_cells() {
        let maze = Maze::new(Grid::filled(Dims(4, 4), Cell::Blocked).unwrap());
        for solver in solvers() {
            assert!(solver.solve_quiet(&maze).is_empty());
        }
    }

    #[test]
    fn uniform_cost_equivalence() {
        for seed in 0..8 {
            let maze = generate_backtrack(21, 31, Some(seed)).unwrap();
            let shortest = Bfs.solve_quiet(&maze);
            assert!(is_valid_path(&maze, &shortest));

            assert_eq!(Dijkstra.solve_quiet(&maze).len(), shortest.len());
            assert_eq!(AStar.solve_quiet(&maze).len(), shortest.len());

            for solver in solvers() {
                let path = solver.solve_quiet(&maze);
                assert!(is_valid_path(&maze, &path), "{}", solver.name());
                assert!(path.len() >= shortest.len());
                // a perfect maze has a single simple path
                assert_eq!(path.len(), shortest.len(), "{}", solver.name());
            }
        }
    }

    #[test]
    fn open_room_paths() {
        let maze = generate_empty(9, 13).unwrap();
        let shortest = maze.start().manhattan(maze.end()) as usize + 1;

        for strategy in Strategy::ALL {
            let path = strategy.solve_quiet(&maze);
            assert!(is_valid_path(&maze, &path), "{}", strategy);
            if strategy.is_optimal() {
                assert_eq!(path.len(), shortest, "{}", strategy);
            } else {
                assert!(path.len() >= shortest, "{}", strategy);
            }
        }
    }

    #[test]
    fn deterministic_strategies_repeat() {
        let maze = generate_empty(11, 11).unwrap();
        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_deterministic()) {
            assert_eq!(strategy.solve_quiet(&maze), strategy.solve_quiet(&maze), "{}", strategy);
        }
    }

    #[test]
    fn sink_does_not_change_result() {
        let maze = generate_backtrack(15, 15, Some(11)).unwrap();
        for solver in solvers() {
            let quiet = solver.solve_quiet(&maze);

            let mut recorder = Recorder::default();
            let loud = solver.solve(&maze, SolveOptions::ALL, &mut recorder);

            if solver.name() != "random" {
                assert_eq!(quiet, loud, "{}", solver.name());
            }
            assert!(!recorder.steps.is_empty(), "{}", solver.name());
            assert_eq!(recorder.solution.as_ref(), Some(&loud));
        }
    }

    #[test]
    fn flags_are_independent() {
        let maze = generate_empty(7, 7).unwrap();

        let mut recorder = Recorder::default();
        Bfs.solve(&maze, SolveOptions::new(true, false), &mut recorder);
        assert!(!recorder.steps.is_empty());
        assert_eq!(recorder.solution, None);

        let mut recorder = Recorder::default();
        Bfs.solve(&maze, SolveOptions::new(false, true), &mut recorder);
        assert!(recorder.steps.is_empty());
        assert!(recorder.solution.is_some());
    }

    #[test]
    fn visited_grows_with_each_step() {
        let maze = generate_empty(7, 7).unwrap();
        let mut recorder = Recorder::default();
        Bfs.solve(&maze, SolveOptions::ALL, &mut recorder);

        // bfs reports each newly discovered vertex once
        let mut steps = recorder.steps.clone();
        steps.sort();
        steps.dedup();
        assert_eq!(steps.len(), recorder.steps.len());
        assert_eq!(recorder.visited, recorder.steps);
    }

    #[test]
    fn strategy_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert_eq!(
            "bogo".parse::<Strategy>(),
            Err(UnknownStrategy("bogo".to_string()))
        );
    }

    #[test]
    fn registry_dispatch() {
        let registry = SolverRegistry::builtin(&Params::new().with("max_steps", 10_000));
        assert_eq!(registry.len(), Strategy::ALL.len());

        let maze = generate_backtrack(11, 11, Some(2)).unwrap();
        let expected = Bfs.solve_quiet(&maze);
        for name in ["bfs", "dijkstra", "a_star"] {
            let solver = registry.get(name).unwrap();
            assert_eq!(solver.name(), name);
            assert_eq!(solver.solve_quiet(&maze), expected);
        }
        assert_eq!(registry.get_or_default("unknown").unwrap().name(), "bfs");
    }

    #[test]
    fn path_validation() {
        let maze = generate_empty(5, 5).unwrap();
        assert!(!is_valid_path(&maze, &[]));
        assert!(!is_valid_path(&maze, &[Dims(1, 1), Dims(3, 3)]));
        assert!(!is_valid_path(&maze, &[Dims(1, 1), Dims(1, 2), Dims(1, 3)]));
        assert!(is_valid_path(
            &maze,
            &[Dims(1, 1), Dims(1, 2), Dims(1, 3), Dims(2, 3), Dims(3, 3)]
        ));
    }

    #[test]
    fn min_queue_is_fifo_on_ties() {
        let mut queue = MinQueue::new();
        queue.push(2, 10);
        queue.push(1, 20);
        queue.push(2, 30);
        queue.push(1, 40);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(order, vec![(1, 20), (1, 40), (2, 10), (2, 30)]);
    }

    #[test]
    fn predecessor_chain() {
        let mut prev = Predecessors::new(5, 0);
        prev.insert(2, 0);
        prev.insert(4, 2);
        assert!(prev.is_seen(0) && prev.is_seen(4));
        assert!(!prev.is_seen(1));
        assert_eq!(prev.chain(4), vec![4, 2, 0]);
        assert_eq!(prev.chain(0), vec![0]);
    }
}
