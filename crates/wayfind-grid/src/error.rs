use thiserror::Error;

use crate::Point;

/// Errors building or editing a [`Terrain`](crate::Terrain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("map has no rows")]
    EmptyMap,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {ch:?} at {at}")]
    InvalidCell { ch: char, at: Point },
    #[error("point {0} is outside the map")]
    OutOfBounds(Point),
    #[error("cell cost must be positive, got {0}")]
    NonPositiveCost(i32),
}
