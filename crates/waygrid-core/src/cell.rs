//! The [`Cell`] type — a grid position's role and its search attributes.

use crate::geom::Point;

/// Which endpoint a terminal cell acts as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalKind {
    Start,
    End,
}

/// The static role of a cell. Wall and Terminal are mutually exclusive:
/// designating a walled cell as a terminal clears the wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Wall,
    Terminal(TerminalKind),
}

impl Role {
    /// Whether this role is either terminal kind.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Role::Terminal(_))
    }
}

/// Per-search attributes of a cell. Meaningful only during and after a
/// search; reset in bulk when one starts.
///
/// `path_cost` only ever decreases within a single search (relaxation).
/// `predecessor`, when set, names the cell this one was reached from,
/// whose own `path_cost` is lower by exactly the connecting step cost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Search {
    /// Accumulated step cost from the start terminal. `f64::INFINITY`
    /// until the cell is first reached.
    pub path_cost: f64,
    /// Grid-distance estimate to the end terminal, fixed at search start.
    pub heuristic: f64,
    /// `path_cost + heuristic`, the frontier ordering key.
    pub total_cost: f64,
    /// Arena index of the cell this one was reached from.
    pub predecessor: Option<usize>,
    /// Whether the cell currently sits in the open set.
    pub on_frontier: bool,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            path_cost: f64::INFINITY,
            heuristic: 0.0,
            total_cost: f64::INFINITY,
            predecessor: None,
            on_frontier: false,
        }
    }
}

impl Search {
    /// Reset to the pre-search state with the given heuristic estimate.
    #[inline]
    pub fn reset(&mut self, heuristic: f64) {
        *self = Self {
            heuristic,
            ..Self::default()
        };
    }
}

/// A single grid position: immutable coordinates, a role, and the mutable
/// attributes of the search in progress.
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Point,
    pub role: Role,
    pub search: Search,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            role: Role::Empty,
            search: Search::default(),
        }
    }

    /// The cell's grid coordinates, fixed when the grid is sized.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }
}
