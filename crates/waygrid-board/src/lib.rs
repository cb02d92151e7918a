//! **waygrid-board** — the driver-facing session over a grid and its
//! search engine.
//!
//! A [`Board`] owns the grid, the terminal pair, and the engine, and
//! exposes the command/query surface a rendering/input driver consumes:
//! edit commands that tolerate out-of-range pointer input, search
//! control, and per-cell [`VisualState`] for display. The board never
//! paces anything; the driver calls [`Board::step`] once per frame or in
//! a tight loop.

mod board;
mod scatter;

pub use board::{Board, VisualState};
