//! The elevation map: terrain heights, plus the start and goal markers.

use std::fmt::{self, Display, Write};
use std::num::TryFromIntError;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{GridError, Marker};
use crate::grid::Grid;
use crate::position::Position;

/// Terrain height at a cell, from `a` (lowest) to `z` (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elevation(u8);

impl Elevation {
    pub const LOWEST: Elevation = Elevation(0);
    pub const HIGHEST: Elevation = Elevation(25);

    /// Returns the elevation of level `level`, or `None` if it is above [`HIGHEST`](Self::HIGHEST).
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::HIGHEST.0).then_some(Elevation(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Parses a plain elevation letter (`a` to `z`).
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then(|| Elevation(c as u8 - b'a'))
    }

    pub fn to_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

/// An immutable elevation map with exactly one start and one goal.
///
/// The start cell has the [lowest](Elevation::LOWEST) and the goal the
/// [highest](Elevation::HIGHEST) elevation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    grid: Grid<Elevation>,
    start: Position,
    goal: Position,
}

impl HeightMap {
    /// Builds a height map from elevations and the marker positions.
    ///
    /// The markers take over the elevation of the cells they are placed on.
    pub fn new(mut grid: Grid<Elevation>, start: Position, goal: Position) -> Result<Self, GridError> {
        *grid.try_get_mut(start)? = Elevation::LOWEST;
        *grid.try_get_mut(goal)? = Elevation::HIGHEST;
        Ok(Self { grid, start, goal })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn width(&self) -> i16 {
        self.grid.width()
    }

    pub fn height(&self) -> i16 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid<Elevation> {
        &self.grid
    }

    /// Distance reported for unreachable cells: `width * height`, more than any path can take.
    pub fn unreachable(&self) -> u32 {
        u32::try_from(self.grid.len()).unwrap_or(u32::MAX)
    }

    /// Returns the elevation at `pos`.
    pub fn elevation_at(&self, pos: Position) -> Result<Elevation, GridError> {
        self.grid.try_get(pos).copied()
    }

    /// Iterate through all positions at exactly `elevation`, in row-major order.
    pub fn find_all(&self, elevation: Elevation) -> impl Iterator<Item = Position> + '_ {
        self.grid
            .cells()
            .filter(move |&(_, &e)| e == elevation)
            .map(|(pos, _)| pos)
    }

    /// Returns a copy with every elevation above `ceiling` lowered to it.
    ///
    /// Every step that was legal in `self` is still legal in the result.
    #[cfg(test)]
    pub fn with_ceiling(&self, ceiling: Elevation) -> Self {
        Self {
            grid: self.grid.map(|&e| e.min(ceiling)),
            ..*self
        }
    }
}

impl Index<Position> for HeightMap {
    type Output = Elevation;

    /// Panics if `pos` is out of bounds.
    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.grid[pos]
    }
}

impl FromStr for HeightMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut start = None;
        let mut goal = None;

        let place = |slot: &mut Option<Position>, marker, pos| match *slot {
            Some(first) => Err(GridError::DuplicateMarker {
                marker,
                first,
                second: pos,
            }),
            None => {
                *slot = Some(pos);
                Ok(Elevation::default())
            }
        };

        let rows = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.chars()
                    .enumerate()
                    .map(|(j, cell)| {
                        let pos = || -> Result<Position, GridError> {
                            let too_large = |_: TryFromIntError| GridError::TooLarge {
                                rows: i + 1,
                                cols: j + 1,
                            };
                            Ok(Position::new(
                                i16::try_from(j).map_err(too_large)?,
                                i16::try_from(i).map_err(too_large)?,
                            ))
                        };
                        match cell {
                            'S' => place(&mut start, Marker::Start, pos()?),
                            'E' => place(&mut goal, Marker::Goal, pos()?),
                            c => Elevation::from_char(c).ok_or(GridError::InvalidCell {
                                row: i,
                                col: j,
                                cell: c,
                            }),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let grid = Grid::from_nested_vecs(rows)?;
        let start = start.ok_or(GridError::MissingMarker {
            marker: Marker::Start,
        })?;
        let goal = goal.ok_or(GridError::MissingMarker {
            marker: Marker::Goal,
        })?;

        HeightMap::new(grid, start, goal)
    }
}

impl Display for HeightMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, elevation) in self.grid.cells() {
            if pos.col == 0 && pos.row != 0 {
                f.write_char('\n')?;
            }
            let c = if pos == self.start {
                Marker::Start.symbol()
            } else if pos == self.goal {
                Marker::Goal.symbol()
            } else {
                elevation.to_char()
            };
            f.write_char(c)?;
        }
        Ok(())
    }
}
