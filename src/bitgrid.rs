use std::ops::Index;

use bit_vec::BitVec;

use crate::grid::Grid;
use crate::position::Position;

/// A set of positions over a grid of fixed dimensions, one bit per cell.
#[derive(Debug, Clone)]
pub struct BitGrid {
    height: i16,
    width: i16,
    raw: BitVec,
}

impl BitGrid {
    pub fn new(height: i16, width: i16) -> Self {
        let (h, w): (usize, usize) = (height.max(0) as _, width.max(0) as _);
        let raw = BitVec::from_elem(h * w, false);
        Self { height, width, raw }
    }

    /// Creates an empty set with the same dimensions as `grid`.
    #[inline]
    pub fn with_dim_from<T>(grid: &Grid<T>) -> Self {
        Self::new(grid.height(), grid.width())
    }

    /// Adds `position` to the set, returning whether it was newly inserted.
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(offset) = self.offset(position) else {
            panic!("position {position:?} out of bounds");
        };
        let fresh = !self.raw[offset];
        self.raw.set(offset, true);
        fresh
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        if let Some(offset) = self.offset(position) {
            self.raw[offset]
        } else {
            false
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.none()
    }

    /// Number of positions in the set.
    pub fn len(&self) -> usize {
        self.raw.iter().filter(|bit| *bit).count()
    }

    #[inline]
    fn offset(&self, position: Position) -> Option<usize> {
        if !(0..self.height).contains(&position.row) || !(0..self.width).contains(&position.col) {
            return None;
        }
        let (i, j, w): (usize, usize, usize) =
            (position.row as _, position.col as _, self.width as _);
        Some(i * w + j)
    }
}

impl Index<Position> for BitGrid {
    type Output = bool;

    #[inline]
    fn index(&self, index: Position) -> &Self::Output {
        if self.contains(index) {
            &true
        } else {
            &false
        }
    }
}
