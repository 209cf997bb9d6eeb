pub mod generator;
pub mod types;

use std::sync::Arc;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{
    dims::Dims,
    maze::{Maze, MazeError},
    registry::Registry,
};
pub use generator::{Backtracking, EmptyRoom, MazeGenerator};
pub use types::Params;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Registry of the maze generators.
pub type GeneratorRegistry = Registry<Arc<dyn MazeGenerator>>;

pub const DEFAULT_BACKTRACK_SIZE: Dims = Dims(9, 9);
pub const DEFAULT_EMPTY_SIZE: Dims = Dims(11, 11);

/// Creates the rng for a run, random seed if none is given.
pub fn rng_from_seed(seed: Option<u64>) -> Random {
    Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()))
}

impl GeneratorRegistry {
    /// `backtrack` (the default) and `empty`.
    pub fn builtin() -> Self {
        let default: Arc<dyn MazeGenerator> = Arc::new(Backtracking);
        let mut registry = Registry::with_default(default);
        registry.register("backtrack".to_string(), Arc::new(Backtracking));
        registry.register("empty".to_string(), Arc::new(EmptyRoom));
        registry
    }
}

/// Runs `generator` and wraps the grid into a [`Maze`] with default endpoints.
pub fn generate_with(
    generator: &dyn MazeGenerator,
    size: Dims,
    seed: Option<u64>,
    params: &Params,
) -> Result<Maze, MazeError> {
    let mut rng = rng_from_seed(seed);
    let grid = generator.generate(size, &mut rng, params)?;

    log::debug!(
        "Generated {:?} maze of size {:?} with {} open cells",
        generator,
        size,
        grid.open_count()
    );

    Ok(Maze::new(grid))
}

/// Perfect maze carved by randomized backtracking, `seed` makes it reproducible.
///
/// Sizes below 3 are accepted and give degenerate mazes, odd sizes of at least
/// 5 are the useful ones.
pub fn generate_backtrack(height: i32, width: i32, seed: Option<u64>) -> Result<Maze, MazeError> {
    generate_with(&Backtracking, Dims(width, height), seed, &Params::default())
}

/// Open room with a blocked border.
pub fn generate_empty(height: i32, width: i32) -> Result<Maze, MazeError> {
    generate_with(&EmptyRoom, Dims(width, height), None, &Params::default())
}
