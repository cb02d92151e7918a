//! **waygrid-core** — grid, cell, and terminal types for incremental
//! grid search.
//!
//! A [`Grid`] owns a flat arena of [`Cell`]s addressed by [`Point`]; a
//! [`TerminalSet`] tracks the two designated endpoints with an
//! oldest-evicted policy. Search state lives on the cells themselves so
//! that an engine can be driven one expansion at a time by any caller.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod terminals;

pub use cell::{Cell, Role, Search, TerminalKind};
pub use error::Error;
pub use geom::{MOORE_OFFSETS, Point};
pub use grid::Grid;
pub use terminals::TerminalSet;
