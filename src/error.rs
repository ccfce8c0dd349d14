//! Errors raised while building or querying a height map.

use thiserror::Error;

use crate::position::Position;

/// One of the two cells that carry a marker instead of a plain elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `S`, the current position, at the lowest elevation.
    Start,
    /// `E`, the best signal, at the highest elevation.
    Goal,
}

impl Marker {
    pub fn symbol(self) -> char {
        match self {
            Marker::Start => 'S',
            Marker::Goal => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({}, {}) is outside a {width}x{height} grid", .pos.col, .pos.row)]
    OutOfBounds {
        pos: Position,
        width: i16,
        height: i16,
    },

    #[error("height map is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected {cell:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: char },

    #[error("no `{}` marker", .marker.symbol())]
    MissingMarker { marker: Marker },

    #[error(
        "more than one `{}` marker: ({}, {}) and ({}, {})",
        .marker.symbol(), .first.col, .first.row, .second.col, .second.row
    )]
    DuplicateMarker {
        marker: Marker,
        first: Position,
        second: Position,
    },

    #[error("{rows}x{cols} cells do not fit in the supported grid dimensions")]
    TooLarge { rows: usize, cols: usize },
}
