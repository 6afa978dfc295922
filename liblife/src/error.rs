use thiserror::Error;

use crate::pos::Position;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cell ({}, {}) lies outside the {rows}x{cols} universe", position.row, position.col)]
pub struct OutOfBounds {
    pub position: Position,
    pub rows: usize,
    pub cols: usize,
}

/// Everything that can make an initial state unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("initial state must start with the row and column count")]
    MissingDimensions,

    #[error("expected a non-negative integer, found {token:?}")]
    Malformed { token: String },

    #[error("a {rows}x{cols} universe is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has no matching column")]
    UnpairedCoordinate { row: usize },

    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}
