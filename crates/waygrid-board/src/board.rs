//! The [`Board`] — a complete editing-and-search session.

use waygrid_core::{Error, Grid, Point, Role, TerminalKind, TerminalSet};
use waygrid_paths::{SearchEngine, Status, backtrace};

/// What a driver should display for a cell. The driver maps each variant
/// to a color; the board never renders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualState {
    Empty,
    Wall,
    TerminalStart,
    TerminalEnd,
    OnFrontier,
    OnPath,
}

/// A session object owning the grid, the terminals, the engine, and the
/// last traced route.
///
/// This is the whole driver boundary: a rendering/input layer injects
/// edit and search commands and polls per-cell visual state each tick.
/// Edit commands silently ignore out-of-range coordinates (noisy pointer
/// input) and are rejected while a search is running, keeping the
/// engine's terminal snapshot valid for the whole run.
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) terminals: TerminalSet,
    pub(crate) engine: SearchEngine,
    pub(crate) path: Option<Vec<Point>>,
}

impl Board {
    /// Create a `width × height` board. Dimensions are cell units; pixel
    /// and cell-size scaling belong to the driver.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: Grid::new(width, height),
            terminals: TerminalSet::new(),
            engine: SearchEngine::new(),
            path: None,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Whether edit commands are currently accepted.
    #[inline]
    pub(crate) fn editable(&self) -> bool {
        self.engine.status() != Status::Running
    }

    // -----------------------------------------------------------------------
    // Edit commands
    // -----------------------------------------------------------------------

    /// Toggle the wall at `p`.
    pub fn toggle_wall(&mut self, p: Point) {
        if self.editable() {
            self.grid.toggle_wall(p);
        }
    }

    /// Set or clear the wall at `p`.
    pub fn set_wall(&mut self, p: Point, present: bool) {
        if self.editable() {
            self.grid.set_wall(p, present);
        }
    }

    /// Revert every wall to Empty.
    pub fn clear_walls(&mut self) {
        if self.editable() {
            self.grid.clear_walls();
        }
    }

    /// Designate `p` as a terminal, evicting the oldest of two.
    pub fn set_terminal(&mut self, p: Point) {
        if self.editable() {
            self.terminals.set(&mut self.grid, p);
        }
    }

    /// Toggle the terminal designation at `p`.
    pub fn toggle_terminal(&mut self, p: Point) {
        if self.editable() {
            self.terminals.toggle(&mut self.grid, p);
        }
    }

    // -----------------------------------------------------------------------
    // Search commands
    // -----------------------------------------------------------------------

    /// Whether both endpoints are designated and a search may start.
    #[inline]
    pub fn ready(&self) -> bool {
        self.terminals.is_complete()
    }

    /// Begin a search between the designated terminals, discarding any
    /// previously traced route.
    pub fn start(&mut self) -> Result<(), Error> {
        self.path = None;
        self.engine.start(&mut self.grid, &self.terminals)
    }

    /// Advance the search by one expansion. No-op unless running.
    pub fn step(&mut self) -> Status {
        self.engine.step(&mut self.grid)
    }

    /// Abandon the search and clear every search decoration. Walls and
    /// terminals survive.
    pub fn cancel(&mut self) {
        self.path = None;
        self.engine.cancel(&mut self.grid);
    }

    /// Clear the search decorations (frontier marks and the traced
    /// route) without touching walls or terminals.
    pub fn reset(&mut self) {
        self.cancel();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current search status.
    #[inline]
    pub fn status(&self) -> Status {
        self.engine.status()
    }

    /// Entries currently queued in the frontier, duplicates included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.engine.frontier_len()
    }

    /// The static role of the cell at `p`.
    pub fn cell_role(&self, p: Point) -> Result<Role, Error> {
        self.grid.cell_at(p).map(|c| c.role)
    }

    /// What the driver should display at `p`.
    pub fn visual_state(&self, p: Point) -> Result<VisualState, Error> {
        let cell = self.grid.cell_at(p)?;
        let state = match cell.role {
            Role::Terminal(TerminalKind::Start) => VisualState::TerminalStart,
            Role::Terminal(TerminalKind::End) => VisualState::TerminalEnd,
            Role::Wall => VisualState::Wall,
            Role::Empty => {
                if self.path.as_deref().is_some_and(|path| path.contains(&p)) {
                    VisualState::OnPath
                } else if cell.search.on_frontier {
                    VisualState::OnFrontier
                } else {
                    VisualState::Empty
                }
            }
        };
        Ok(state)
    }

    /// The traced route, Start→End. `Some` only after
    /// [`Board::trace_path`] succeeded for the current search.
    pub fn current_path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Extract the route of a `Found` search and record it so that
    /// [`Board::visual_state`] reports it as `OnPath`.
    pub fn trace_path(&mut self) -> Result<&[Point], Error> {
        if self.engine.status() != Status::Found {
            return Err(Error::NoPath);
        }
        // The engine's snapshot, not the live terminal set: terminals may
        // be re-designated after a search settles without invalidating it.
        let end = self.grid.at(self.engine.goal_index()).pos();
        let path = backtrace(&self.grid, end)?;
        Ok(self.path.insert(path).as_slice())
    }
}
