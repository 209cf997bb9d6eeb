use crate::dims::Dims;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Blocked,
    Open,
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    pub fn is_blocked(self) -> bool {
        !self.is_open()
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Blocked => '#',
            Cell::Open => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Blocked),
            '.' | ' ' => Some(Cell::Open),
            _ => None,
        }
    }
}

/// One of the four axis-aligned directions a passage can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Way {
    Right,
    Left,
    Bottom,
    Top,
}

impl Way {
    /// Canonical order in which neighbors are listed in the adjacency graph.
    ///
    /// Searches that expand neighbors in graph order inherit it as their tie-break.
    pub const ALL: [Way; 4] = [Way::Right, Way::Left, Way::Bottom, Way::Top];

    pub fn offset(self) -> Dims {
        match self {
            Way::Right => Dims(1, 0),
            Way::Left => Dims(-1, 0),
            Way::Bottom => Dims(0, 1),
            Way::Top => Dims(0, -1),
        }
    }

    pub fn reverse(self) -> Way {
        match self {
            Way::Right => Way::Left,
            Way::Left => Way::Right,
            Way::Bottom => Way::Top,
            Way::Top => Way::Bottom,
        }
    }

    /// Returns the direction leading from `from` to the adjacent `to`.
    ///
    /// Returns `None` if the cells are not 4-adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<Way> {
        match (to.0 - from.0, to.1 - from.1) {
            (1, 0) => Some(Way::Right),
            (-1, 0) => Some(Way::Left),
            (0, 1) => Some(Way::Bottom),
            (0, -1) => Some(Way::Top),
            _ => None,
        }
    }
}
