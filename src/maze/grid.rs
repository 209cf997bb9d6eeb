use std::fmt;

use crate::{array::Array2D, dims::Dims};

use super::{Cell, MazeError};

/// Raw passable/blocked surface of a maze, `height` rows of `width` cells.
///
/// Nothing forces the border to be blocked, generated grids just happen to
/// keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a grid of the given size with every cell set to `cell`.
    pub fn filled(size: Dims, cell: Cell) -> Result<Self, MazeError> {
        Array2D::new_dims(cell, size)
            .map(|cells| Self { cells })
            .ok_or(MazeError::InvalidDimensions(size))
    }

    /// Parses rows of `#` (blocked) and `.` (open) characters.
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let size = Dims(width as i32, height as i32);

        if width == 0 {
            return Err(MazeError::InvalidDimensions(size));
        }

        let mut buf = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(MazeError::InvalidDimensions(size));
            }
            for c in row.chars() {
                buf.push(Cell::from_char(c).ok_or(MazeError::InvalidDimensions(size))?);
            }
        }

        Array2D::from_vec(buf, width, height)
            .map(|cells| Self { cells })
            .ok_or(MazeError::InvalidDimensions(size))
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    /// Returns `None` outside the grid.
    pub fn get(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Out of bounds counts as blocked.
    pub fn is_open(&self, pos: Dims) -> bool {
        self.get(pos).is_some_and(Cell::is_open)
    }

    /// Sets a cell, positions outside the grid are ignored.
    pub fn set(&mut self, pos: Dims, cell: Cell) {
        if let Some(c) = self.cells.get_mut(pos) {
            *c = cell;
        }
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    pub fn iter_open(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos().filter(|&pos| self.cells[pos].is_open())
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
