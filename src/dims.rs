use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a cell, or size of a grid: `Dims(x, y)` / `Dims(width, height)`.
///
/// Ordering is row-major, `y` first and then `x`, so it agrees with the linear
/// index `y * width + x` used by [`Array2D`](crate::array::Array2D).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance, `|x1 - x2| + |y1 - y2|`.
    pub fn manhattan(self, other: Dims) -> i32 {
        (self - other).abs_sum()
    }

    /// Iterates over every position in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }
}

impl Ord for Dims {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.1, self.0).cmp(&(other.1, other.0))
    }
}

impl PartialOrd for Dims {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Dims(2, 0), Dims(0, 1), Dims(1, 0), Dims(0, 0)];
        cells.sort();
        assert_eq!(cells, vec![Dims(0, 0), Dims(1, 0), Dims(2, 0), Dims(0, 1)]);
    }

    #[test]
    fn manhattan() {
        assert_eq!(Dims(1, 1).manhattan(Dims(3, 3)), 4);
        assert_eq!(Dims(3, 1).manhattan(Dims(1, 4)), 5);
        assert_eq!(Dims(2, 2).manhattan(Dims(2, 2)), 0);
    }

    #[test]
    fn iter_fill_row_by_row() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(cells, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }
}
