//! The crate-wide error taxonomy.

use std::error;
use std::fmt;

use crate::geom::Point;

/// Errors surfaced by grid queries and search operations.
///
/// Edit commands never raise; they no-op on bad input so a driver can
/// forward noisy pointer events unchecked. An exhausted search is not an
/// error either: the engine reports `Unreachable` through its status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A coordinate query outside `[0, width) × [0, height)`.
    OutOfBounds(Point),
    /// A search was started before both terminals were designated.
    MissingTerminals,
    /// Path extraction was requested while no completed search holds a
    /// route.
    NoPath,
    /// A predecessor chain failed to terminate within the grid size.
    /// Indicates a broken invariant; not user-recoverable.
    CorruptState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
            Error::MissingTerminals => {
                f.write_str("search requires both a start and an end terminal")
            }
            Error::NoPath => f.write_str("no completed search holds a path"),
            Error::CorruptState => f.write_str("predecessor chain does not terminate"),
        }
    }
}

impl error::Error for Error {}
