use std::fmt;

use rand::seq::SliceRandom as _;

use crate::{
    dims::Dims,
    maze::{Cell, Grid, MazeError, Way},
};

use super::{Params, Random};

pub trait MazeGenerator: fmt::Debug + Sync + Send {
    /// Produces the grid of a maze of the given `(width, height)` size.
    fn generate(&self, size: Dims, rng: &mut Random, params: &Params) -> Result<Grid, MazeError>;
}

/// Randomized depth-first carving with a step of two cells.
///
/// Starts at `(1, 1)` on a fully blocked canvas. Every cell is carved into from
/// exactly one direction, so the result is a perfect maze. Directions are
/// shuffled once per cell and tried in that order, as a recursive backtracker
/// would, but the frames live on an explicit stack.
#[derive(Debug)]
pub struct Backtracking;

impl MazeGenerator for Backtracking {
    fn generate(&self, size: Dims, rng: &mut Random, _: &Params) -> Result<Grid, MazeError> {
        if !size.all_positive() {
            return Err(MazeError::InvalidDimensions(size));
        }

        let mut grid = Grid::filled(size, Cell::Blocked)?;

        let start = Dims(1, 1);
        if !grid.is_in_bounds(start) {
            return Ok(grid);
        }
        grid.set(start, Cell::Open);

        let mut stack = vec![Frame::new(start, rng)];
        while let Some(frame) = stack.last_mut() {
            let Some(way) = frame.next_way() else {
                stack.pop();
                continue;
            };

            let current = frame.pos;
            let target = current + way.offset() * 2;
            if grid.get(target) == Some(Cell::Blocked) {
                grid.set(current + way.offset(), Cell::Open);
                grid.set(target, Cell::Open);
                stack.push(Frame::new(target, rng));
            }
        }

        Ok(grid)
    }
}

struct Frame {
    pos: Dims,
    ways: [Way; 4],
    next: usize,
}

impl Frame {
    fn new(pos: Dims, rng: &mut Random) -> Self {
        let mut ways = Way::ALL;
        ways.shuffle(rng);
        Frame { pos, ways, next: 0 }
    }

    fn next_way(&mut self) -> Option<Way> {
        let way = self.ways.get(self.next).copied();
        self.next += 1;
        way
    }
}

/// Open room surrounded by a one cell thick blocked border.
#[derive(Debug)]
pub struct EmptyRoom;

impl MazeGenerator for EmptyRoom {
    fn generate(&self, size: Dims, _: &mut Random, _: &Params) -> Result<Grid, MazeError> {
        if !size.all_positive() {
            return Err(MazeError::InvalidDimensions(size));
        }

        let mut grid = Grid::filled(size, Cell::Blocked)?;
        for pos in Dims::iter_fill(Dims::ONE, size - Dims::ONE) {
            grid.set(pos, Cell::Open);
        }

        Ok(grid)
    }
}
