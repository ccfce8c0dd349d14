//! Breadth-first search state: the FIFO frontier and the visited/distance table it fills in.

use std::collections::VecDeque;

use crate::bitgrid::BitGrid;
use crate::grid::Grid;
use crate::position::Position;

/// Distance stored for cells not reached (yet).
const UNREACHED: u32 = u32::MAX;

/// Per-search table of visited cells and their distances from the search root.
///
/// A cell's distance is set exactly once, at the time it is first visited, and a cell has a
/// distance if and only if it is visited.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    visited: BitGrid,
    distances: Grid<u32>,
}

impl DistanceTable {
    /// Creates a table with no visited cells, shaped like `grid`.
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self {
            visited: BitGrid::with_dim_from(grid),
            distances: Grid::filled(grid.height(), grid.width(), UNREACHED),
        }
    }

    /// Marks `pos` visited at `distance`, unless it was already visited.
    ///
    /// Returns whether `pos` was newly visited. Panics if `pos` is out of bounds.
    pub fn visit(&mut self, pos: Position, distance: u32) -> bool {
        if !self.visited.insert(pos) {
            return false;
        }
        let slot = &mut self.distances[pos];
        debug_assert_eq!(*slot, UNREACHED);
        *slot = distance;
        true
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited.contains(pos)
    }

    /// Distance recorded for `pos`, or `None` if it has not been visited.
    pub fn distance_at(&self, pos: Position) -> Option<u32> {
        self.is_visited(pos).then(|| self.distances[pos])
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Positions waiting to be expanded, in the order they were discovered.
///
/// Every position enters the frontier at most once: it is marked visited in the table when it is
/// enqueued, and enqueuing an already visited position is a no-op.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<(Position, u32)>,
    table: DistanceTable,
}

impl Frontier {
    pub fn new(table: DistanceTable) -> Self {
        Self {
            queue: VecDeque::new(),
            table,
        }
    }

    /// Enqueues `pos` at `distance` if it hasn't been visited yet; returns whether it was.
    pub fn push(&mut self, pos: Position, distance: u32) -> bool {
        let fresh = self.table.visit(pos, distance);
        if fresh {
            self.queue.push_back((pos, distance));
        }
        fresh
    }

    /// Dequeues the oldest position, together with its distance.
    pub fn pop(&mut self) -> Option<(Position, u32)> {
        self.queue.pop_front()
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }
}
