//! The [`TerminalSet`] — at most two designated endpoints, oldest evicted.

use crate::cell::{Role, TerminalKind};
use crate::geom::Point;
use crate::grid::Grid;

/// Insertion-ordered set of at most two terminal cells, by arena index.
/// The first slot acts as the search start, the second as the end.
#[derive(Debug, Default)]
pub struct TerminalSet {
    slots: Vec<usize>,
}

impl TerminalSet {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(2),
        }
    }

    /// Arena index of the start terminal, if designated.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// Arena index of the end terminal, if designated.
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.slots.get(1).copied()
    }

    /// True iff both endpoints are designated.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.slots.len() == 2
    }

    /// Number of designated terminals (0, 1, or 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no terminal is designated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Designate `p` as a terminal. No-op if it already is one or lies out
    /// of bounds. With two terminals held, the oldest is evicted back to
    /// Empty before `p` is appended. Designation clears any wall at `p`.
    pub fn set(&mut self, grid: &mut Grid, p: Point) {
        let Some(idx) = grid.index_of(p) else { return };
        if self.slots.contains(&idx) {
            return;
        }
        if self.slots.len() == 2 {
            let oldest = self.slots.remove(0);
            grid.at_mut(oldest).role = Role::Empty;
        }
        self.slots.push(idx);
        self.restamp(grid);
    }

    /// Toggle the designation at `p`: remove it without replacement if it
    /// is already a terminal, otherwise behave as [`TerminalSet::set`].
    pub fn toggle(&mut self, grid: &mut Grid, p: Point) {
        let Some(idx) = grid.index_of(p) else { return };
        match self.slots.iter().position(|&i| i == idx) {
            Some(slot) => {
                self.slots.remove(slot);
                grid.at_mut(idx).role = Role::Empty;
                self.restamp(grid);
            }
            None => self.set(grid, p),
        }
    }

    /// Re-stamp roles so slot 0 reads Start and slot 1 End. Stamping also
    /// clears any wall on a freshly designated cell.
    fn restamp(&self, grid: &mut Grid) {
        for (slot, &idx) in self.slots.iter().enumerate() {
            let kind = if slot == 0 {
                TerminalKind::Start
            } else {
                TerminalKind::End
            };
            grid.at_mut(idx).role = Role::Terminal(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(grid: &Grid) -> Vec<Role> {
        grid.cells().map(|c| c.role).collect()
    }

    #[test]
    fn set_stamps_start_then_end() {
        let mut g = Grid::new(3, 1);
        let mut t = TerminalSet::new();
        t.set(&mut g, Point::new(0, 0));
        assert!(!t.is_complete());
        assert_eq!(g.at(0).role, Role::Terminal(TerminalKind::Start));

        t.set(&mut g, Point::new(2, 0));
        assert!(t.is_complete());
        assert_eq!(g.at(2).role, Role::Terminal(TerminalKind::End));
        assert_eq!(t.start(), Some(0));
        assert_eq!(t.end(), Some(2));
    }

    #[test]
    fn third_terminal_evicts_oldest() {
        let mut g = Grid::new(3, 1);
        let mut t = TerminalSet::new();
        t.set(&mut g, Point::new(0, 0)); // A
        t.set(&mut g, Point::new(1, 0)); // B
        t.set(&mut g, Point::new(2, 0)); // C evicts A

        assert_eq!(g.at(0).role, Role::Empty);
        assert_eq!(g.at(1).role, Role::Terminal(TerminalKind::Start));
        assert_eq!(g.at(2).role, Role::Terminal(TerminalKind::End));
        assert_eq!(t.start(), Some(1));
        assert_eq!(t.end(), Some(2));
    }

    #[test]
    fn set_is_noop_on_existing_terminal() {
        let mut g = Grid::new(3, 1);
        let mut t = TerminalSet::new();
        t.set(&mut g, Point::new(0, 0));
        t.set(&mut g, Point::new(1, 0));
        let before = roles(&g);
        t.set(&mut g, Point::new(0, 0));
        assert_eq!(roles(&g), before);
        assert_eq!(t.start(), Some(0));
    }

    #[test]
    fn toggle_removes_without_replacement() {
        let mut g = Grid::new(3, 1);
        let mut t = TerminalSet::new();
        t.set(&mut g, Point::new(0, 0));
        t.set(&mut g, Point::new(2, 0));
        t.toggle(&mut g, Point::new(0, 0));

        assert_eq!(t.len(), 1);
        assert_eq!(g.at(0).role, Role::Empty);
        // The survivor becomes the start.
        assert_eq!(g.at(2).role, Role::Terminal(TerminalKind::Start));
        assert_eq!(t.start(), Some(2));
        assert_eq!(t.end(), None);
    }

    #[test]
    fn designation_clears_wall() {
        let mut g = Grid::new(2, 1);
        g.set_wall(Point::new(1, 0), true);
        let mut t = TerminalSet::new();
        t.set(&mut g, Point::new(1, 0));
        assert_eq!(g.at(1).role, Role::Terminal(TerminalKind::Start));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut g = Grid::new(2, 1);
        let mut t = TerminalSet::new();
        t.set(&mut g, Point::new(5, 5));
        t.toggle(&mut g, Point::new(-1, 0));
        assert!(t.is_empty());
    }
}
