//! The steppable best-first search engine.

use waygrid_core::{Error, Grid, Search, TerminalSet};

use crate::distance::{manhattan, step_cost};

/// Search lifecycle status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No search in progress.
    #[default]
    Idle,
    /// A search is in progress; call `step` to advance it.
    Running,
    /// The end terminal was expanded; a route can be extracted.
    Found,
    /// The frontier emptied before the end terminal was reached.
    Unreachable,
}

impl Status {
    /// Whether the search has come to rest (`Found` or `Unreachable`).
    #[inline]
    pub const fn is_settled(self) -> bool {
        matches!(self, Status::Found | Status::Unreachable)
    }
}

/// Owns the frontier and advances the search by exactly one expansion per
/// [`step`](SearchEngine::step) call, so the caller controls the cadence,
/// whether it is a render loop or a tight test loop. The engine has no
/// notion of time and never blocks.
///
/// The frontier is an insertion-ordered `Vec` of arena indices, stable
/// sorted by total cost at each step so that equal-cost entries expand in
/// discovery order. Relaxation re-appends an improved cell without
/// removing stale entries and no closed set is kept; some cells are
/// re-processed as a result, which the `candidate < path_cost` guard keeps
/// correct. Step counts, and thus animation pacing, depend on this
/// behavior.
#[derive(Debug, Default)]
pub struct SearchEngine {
    frontier: Vec<usize>,
    goal: usize,
    status: Status,
    nbuf: Vec<usize>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            frontier: Vec::new(),
            goal: 0,
            status: Status::Idle,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Current lifecycle status.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Arena index of the snapshotted end terminal. Meaningful only while
    /// a search is underway or settled.
    #[inline]
    pub fn goal_index(&self) -> usize {
        self.goal
    }

    /// Number of entries currently queued in the frontier, duplicates
    /// included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Begin a search between the designated terminals.
    ///
    /// Snapshots the terminal pair (the engine does not re-read the set
    /// mid-search) and resets every cell's search attributes, leaving
    /// roles and walls untouched; each cell's heuristic is precomputed
    /// against the end terminal. The frontier is seeded with the start
    /// cell and the status becomes `Running`. Fails with
    /// [`Error::MissingTerminals`] unless both endpoints are designated.
    pub fn start(&mut self, grid: &mut Grid, terminals: &TerminalSet) -> Result<(), Error> {
        let (Some(start), Some(goal)) = (terminals.start(), terminals.end()) else {
            return Err(Error::MissingTerminals);
        };
        self.goal = goal;

        let goal_pos = grid.at(goal).pos();
        for cell in grid.cells_mut() {
            let h = manhattan(cell.pos(), goal_pos) as f64;
            cell.search.reset(h);
        }

        let s = grid.at_mut(start);
        s.search.path_cost = 0.0;
        s.search.total_cost = s.search.heuristic;
        s.search.on_frontier = true;

        self.frontier.clear();
        self.frontier.push(start);
        self.status = Status::Running;
        log::debug!("search started: {} -> {}", grid.at(start).pos(), goal_pos);
        Ok(())
    }

    /// Advance the search by exactly one frontier expansion. No-op
    /// returning the current status unless `Running`.
    ///
    /// One expansion: pop the cheapest frontier entry; if it is the end
    /// terminal the search settles as `Found`, otherwise relax each of its
    /// neighbors. An empty frontier settles as `Unreachable`.
    pub fn step(&mut self, grid: &mut Grid) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        if self.frontier.is_empty() {
            self.status = Status::Unreachable;
            log::debug!("frontier exhausted before reaching the end terminal");
            return self.status;
        }

        // Stable sort, then take the front: equal totals expand in the
        // order they joined the frontier.
        self.frontier.sort_by(|&a, &b| {
            grid.at(a)
                .search
                .total_cost
                .total_cmp(&grid.at(b).search.total_cost)
        });
        let current = self.frontier.remove(0);
        // Stale duplicates may remain queued, so membership is recomputed
        // rather than unconditionally cleared.
        grid.at_mut(current).search.on_frontier = self.frontier.contains(&current);

        if current == self.goal {
            self.status = Status::Found;
            log::debug!(
                "end terminal expanded at cost {}",
                grid.at(current).search.path_cost
            );
            return self.status;
        }

        let current_pos = grid.at(current).pos();
        let current_cost = grid.at(current).search.path_cost;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        grid.neighbors(current_pos, &mut nbuf);

        for &ni in nbuf.iter() {
            let candidate = current_cost + step_cost(current_pos, grid.at(ni).pos());
            if candidate < grid.at(ni).search.path_cost {
                let n = grid.at_mut(ni);
                n.search.path_cost = candidate;
                n.search.predecessor = Some(current);
                n.search.total_cost = candidate + n.search.heuristic;
                n.search.on_frontier = true;
                self.frontier.push(ni);
            }
        }
        self.nbuf = nbuf;

        self.status
    }

    /// Abandon the search: status returns to `Idle` and every cell's
    /// search attributes are cleared. Roles and walls survive.
    pub fn cancel(&mut self, grid: &mut Grid) {
        self.frontier.clear();
        self.status = Status::Idle;
        for cell in grid.cells_mut() {
            cell.search = Search::default();
        }
    }
}
