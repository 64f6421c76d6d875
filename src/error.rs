use crate::pathfinding::Position;
use thiserror::Error;

/// Broad classification of input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The grid or coordinates are malformed
    InvalidInput,
    /// Reading or writing failed
    Io,
}

/// Errors raised while collecting or validating search input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("grid is not rectangular: row {row} has {found} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{what} {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        rows: i32,
        cols: i32,
    },

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::Io(_) => ErrorKind::Io,
            _ => ErrorKind::InvalidInput,
        }
    }
}
