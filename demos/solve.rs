use std::env;

use gridmaze::{
    algorithms::{generate_backtrack, Params},
    solver::{LogSink, SolveOptions, Strategy},
    Dims, Maze,
};
use log::{Level, LevelFilter, Log, Metadata, Record};

use rand::{thread_rng, Rng as _};

struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger { level: Level::Debug };

fn main() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let args: Vec<String> = env::args().skip(1).collect();
    let height: i32 = args.first().map_or(21, |s| s.parse().expect("height must be an integer"));
    let width: i32 = args.get(1).map_or(41, |s| s.parse().expect("width must be an integer"));
    let input_seed = args.get(2).map(|s| s.parse::<u64>().expect("seed must be an integer"));
    let strategies = match args.get(3) {
        Some(name) => vec![name.parse::<Strategy>().unwrap_or_else(|e| panic!("{e}"))],
        None => Strategy::ALL.to_vec(),
    };

    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());
    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let maze = generate_backtrack(height, width, Some(seed)).expect("invalid maze size");
    let params = Params::new()
        .with("seed", seed)
        .with("max_steps", maze.graph().vertex_count() * 4);

    for strategy in strategies {
        let solver = strategy.solver(&params);
        let path = solver.solve(&maze, SolveOptions::new(false, true), &mut LogSink);

        println!("{} ({} cells)", strategy, path.len());
        show_maze(&maze, &path);
    }
}

fn show_maze(maze: &Maze, path: &[Dims]) {
    let grid = maze.grid();
    for pos in grid.cells().iter_pos() {
        let c = if pos == maze.start() {
            'S'
        } else if pos == maze.end() {
            'E'
        } else if path.contains(&pos) {
            'o'
        } else if grid.is_open(pos) {
            ' '
        } else {
            '█'
        };
        print!("{}", c);

        if pos.0 == maze.size().0 - 1 {
            println!();
        }
    }
}
