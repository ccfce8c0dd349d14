//! Position and movement in a 2-dimensional grid.

/// A position in a 2-dimensional grid, as a `(column, row)` pair.
///
/// The coordinates are signed integers, making it easier to deal with movements around `0`, which
/// can result in negative coordinates. Those are simply out of bounds for every grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index.
    pub col: i16,
    /// Row index.
    pub row: i16,
}

impl Position {
    pub const fn new(col: i16, row: i16) -> Self {
        Position { col, row }
    }

    /// Returns the new position after a `movement` from `self`.
    #[must_use]
    pub fn next(self, movement: Movement) -> Self {
        let inc = movement.to_tuple();
        Position {
            col: self.col + inc.0,
            row: self.row + inc.1,
        }
    }

    /// Number of unit steps between `self` and `other` if nothing were in the way.
    pub fn manhattan(self, other: Position) -> u32 {
        u32::from(self.col.abs_diff(other.col)) + u32::from(self.row.abs_diff(other.row))
    }
}

/// An individual unit step.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    Left,
    Right,
}

impl Movement {
    pub const ALL: [Movement; 4] = [Movement::Up, Movement::Down, Movement::Left, Movement::Right];

    fn to_tuple(self) -> (i16, i16) {
        // The origin is at the top left, and row indices grow down.
        match self {
            Movement::Up => (0, -1),
            Movement::Down => (0, 1),
            Movement::Left => (-1, 0),
            Movement::Right => (1, 0),
        }
    }
}
