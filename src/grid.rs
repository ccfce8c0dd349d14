//! A 2-dimensional grid.

use std::iter;
use std::ops::{Index, IndexMut};

use crate::error::GridError;
use crate::position::{Movement, Position};

/// A rectangular, non-empty, 2-dimensional grid of `T` values, stored in row-major order.
///
/// The height, width, and all coordinates are signed integers, making it easier to deal with
/// movements around `0`, which can result in negative coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: i16,
    width: i16,
    raw: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid from 2-dimensional nested vecs, one per row.
    pub fn from_nested_vecs(vecs: Vec<Vec<T>>) -> Result<Self, GridError> {
        let (h, w) = match vecs.first() {
            Some(first) if !first.is_empty() => (vecs.len(), first.len()),
            _ => return Err(GridError::Empty),
        };
        let (Ok(height), Ok(width)) = (i16::try_from(h), i16::try_from(w)) else {
            return Err(GridError::TooLarge { rows: h, cols: w });
        };

        let mut raw = Vec::with_capacity(h * w);
        for (row, cells) in vecs.into_iter().enumerate() {
            if cells.len() != w {
                return Err(GridError::RaggedRow {
                    row,
                    expected: w,
                    found: cells.len(),
                });
            }
            raw.extend(cells);
        }

        Ok(Self { height, width, raw })
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always `false`: grids are never empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether `pos` falls inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Returns a reference to the value at `pos`, or `None` if `pos` is not in bounds.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.raw.get(self.index(pos)?)
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if `pos` is not in bounds.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        let index = self.index(pos)?;
        self.raw.get_mut(index)
    }

    /// Like [`get`](Self::get), but reports an out-of-bounds `pos` as an error.
    pub fn try_get(&self, pos: Position) -> Result<&T, GridError> {
        self.get(pos).ok_or_else(|| GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    /// Like [`get_mut`](Self::get_mut), but reports an out-of-bounds `pos` as an error.
    pub fn try_get_mut(&mut self, pos: Position) -> Result<&mut T, GridError> {
        let (width, height) = (self.width, self.height);
        let index = self.index(pos).ok_or(GridError::OutOfBounds { pos, width, height })?;
        Ok(&mut self.raw[index])
    }

    /// Iterate through all cells in the grid, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> {
        let mut pos = Position::new(0, 0);
        iter::from_fn(move || {
            let index = self.index(pos)?;
            let cur = (pos, &self.raw[index]);
            pos.col += 1;
            if pos.col >= self.width {
                pos.col = 0;
                pos.row += 1;
            }
            Some(cur)
        })
    }

    /// Iterate through the positions in the von Neumann neighborhood of `pos`: the cells directly
    /// above, below, left and right of it, in that order.
    ///
    /// The grid does *not* wrap around the edges, and `pos` must point to a cell within the grid
    /// (in other words, it must in bounds).
    pub fn von_neumann_neighborhood(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        assert!(self.contains(pos), "`pos` should be in bounds");

        Movement::ALL
            .into_iter()
            .map(move |movement| pos.next(movement))
            .filter(move |next| self.contains(*next))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !(0..self.height).contains(&pos.row) || !(0..self.width).contains(&pos.col) {
            return None;
        }
        let (i, j, w): (usize, usize, usize) = (pos.row as _, pos.col as _, self.width as _);
        Some(i * w + j)
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid of `height` and `width` with every cell set to `value`.
    pub fn filled(height: i16, width: i16, value: T) -> Self {
        assert!(height > 0 && width > 0, "grid must not be empty");
        let (h, w) = (height as usize, width as usize);
        let raw = vec![value; h * w];
        Self { height, width, raw }
    }

    /// Creates a new grid with the same dimensions, mapping every value with `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            height: self.height,
            width: self.width,
            raw: self.raw.iter().map(f).collect(),
        }
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        match self.try_get(pos) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        match self.try_get_mut(pos) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(col: i16, row: i16) -> Position {
        Position::new(col, row)
    }

    #[test]
    fn get_shared_or_mut_references() {
        //     Grid
        // +-----------+
        // | 0 1 1 1 1 |
        // | 1 1 1 1 1 |
        // +-----------+

        let vecs = vec![vec![false, true, true, true, true], vec![true; 5]];
        let mut grid = Grid::from_nested_vecs(vecs).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.len(), 10);

        assert_eq!(grid.get(p(3, 1)), Some(&true));
        assert_eq!(grid.get(p(0, 0)), Some(&false));
        assert_eq!(grid.get(p(3, 2)), None);
        assert_eq!(grid.get(p(3, -1)), None);
        assert_eq!(grid.get(p(5, 1)), None);
        assert_eq!(grid.get(p(-1, 1)), None);

        assert_eq!(grid.get_mut(p(3, 1)), Some(&mut true));
        assert_eq!(grid.get_mut(p(3, 2)), None);
        assert_eq!(grid.get_mut(p(-1, 1)), None);
    }

    #[test]
    fn out_of_bounds_is_reported_not_clamped() {
        let grid = Grid::from_nested_vecs(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.try_get(p(1, 1)), Ok(&4));
        assert_eq!(
            grid.try_get(p(2, 1)),
            Err(GridError::OutOfBounds {
                pos: p(2, 1),
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 grid")]
    fn indexing_out_of_bounds_panics() {
        let grid = Grid::from_nested_vecs(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
        let _should_panic = grid[p(0, 2)];
    }

    #[test]
    fn reject_empty_and_ragged_input() {
        assert_eq!(
            Grid::<u8>::from_nested_vecs(vec![]),
            Err(GridError::Empty)
        );
        assert_eq!(
            Grid::<u8>::from_nested_vecs(vec![vec![]]),
            Err(GridError::Empty)
        );
        assert_eq!(
            Grid::from_nested_vecs(vec![vec![1u8, 2, 3], vec![4, 5]]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn iterate_through_all_cells() {
        //   Grid
        // +-------+
        // | 0 1 1 |
        // | 1 1 1 |
        // +-------+

        let vecs = vec![vec![false, true, true], vec![true; 3]];
        let grid = Grid::from_nested_vecs(vecs).unwrap();

        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            vec![
                (p(0, 0), &false),
                (p(1, 0), &true),
                (p(2, 0), &true),
                (p(0, 1), &true),
                (p(1, 1), &true),
                (p(2, 1), &true)
            ]
        );
    }

    #[test]
    fn iterate_through_the_von_neumann_neighborhood() {
        //    Grid        von Neumann neighborhoods
        //  +-------+      +-------+      +-------+
        //  | . . . |      |   .   |      |       |
        //  | . . . |      | . * . |      |     . |
        //  | . . . |      |   .   |      |   . * |
        //  +-------+      +-------+      +-------+
        //                   (1,1)          (2,2)

        let grid = Grid::filled(3, 3, ());

        assert_eq!(
            grid.von_neumann_neighborhood(p(1, 1)).collect::<Vec<_>>(),
            vec![p(1, 0), p(1, 2), p(0, 1), p(2, 1)]
        );
        assert_eq!(
            grid.von_neumann_neighborhood(p(2, 2)).collect::<Vec<_>>(),
            vec![p(2, 1), p(1, 2)]
        );
        assert_eq!(
            grid.von_neumann_neighborhood(p(0, 0)).collect::<Vec<_>>(),
            vec![p(0, 1), p(1, 0)]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = Grid::filled(1, 1, 0u8);
        assert_eq!(grid.von_neumann_neighborhood(p(0, 0)).count(), 0);
    }

    #[test]
    #[should_panic]
    fn neighborhood_requires_cell_to_be_in_bounds() {
        let grid = Grid::filled(2, 3, false);
        let _should_panic = grid.von_neumann_neighborhood(p(3, 2));
    }

    #[test]
    fn map_keeps_dimensions() {
        let grid = Grid::from_nested_vecs(vec![vec![1u8, 2, 3], vec![4, 5, 6]]).unwrap();
        let doubled = grid.map(|v| u32::from(*v) * 2);
        assert_eq!(doubled.height(), 2);
        assert_eq!(doubled.width(), 3);
        assert_eq!(doubled[p(2, 1)], 12);
    }
}
