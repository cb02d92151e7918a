//! **waygrid-paths** — steppable best-first search over waygrid grids.
//!
//! The [`SearchEngine`] advances exactly one frontier expansion per
//! [`SearchEngine::step`] call, so the driver controls the cadence; the
//! engine has no notion of time. Start a search with
//! [`SearchEngine::start`], poll [`Status`] each step, and extract the
//! route with [`backtrace`] once the status settles as `Found`.
//!
//! Two behaviors are part of the observable contract:
//!
//! - The frontier keeps no closed set and is never deduplicated; an
//!   improving relaxation re-appends the cell and leaves stale entries
//!   behind. Step counts depend on this.
//! - The heuristic is plain Manhattan distance, which may overestimate
//!   across 1.4-cost diagonals, so found routes are not guaranteed
//!   optimal in every wall layout.

mod distance;
mod engine;
mod path;

pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, chebyshev, manhattan, step_cost};
pub use engine::{SearchEngine, Status};
pub use path::backtrace;
