//! Which moves are legal on a height map.
//!
//! A step goes to one of the four orthogonally adjacent cells, and may climb at most one level.
//! Descending is never restricted, so the rule is not symmetric: the way down a cliff is not
//! necessarily a way back up.

use crate::grid::Grid;
use crate::heightmap::HeightMap;
use crate::position::Position;

/// Direction in which the edges of the step graph are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// From a cell to the cells it can step to.
    Forward,
    /// From a cell to the cells that can step to it.
    Backward,
}

impl Traversal {
    /// Whether the search may expand `current` into its neighbor `next`.
    #[inline]
    pub fn allows(self, map: &HeightMap, current: Position, next: Position) -> bool {
        match self {
            Traversal::Forward => can_step(map, current, next),
            Traversal::Backward => can_step(map, next, current),
        }
    }
}

/// Up to four in-bounds neighbors of `pos`, always in the order up, down, left, right.
///
/// Panics if `pos` itself is out of bounds.
pub fn neighbors_of<T>(grid: &Grid<T>, pos: Position) -> impl Iterator<Item = Position> + '_ {
    grid.von_neumann_neighborhood(pos)
}

/// Whether a single step from `from` to `to` is legal: `to` may be at most one level higher.
///
/// Both positions must be in bounds.
#[inline]
pub fn can_step(map: &HeightMap, from: Position, to: Position) -> bool {
    map[to].level() <= map[from].level() + 1
}

/// The neighbors of `pos` the search may expand into, following `traversal`.
pub fn legal_steps(
    map: &HeightMap,
    pos: Position,
    traversal: Traversal,
) -> impl Iterator<Item = Position> + '_ {
    neighbors_of(map.grid(), pos).filter(move |&next| traversal.allows(map, pos, next))
}
