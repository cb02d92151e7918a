//! The [`Grid`] type — a flat arena of [`Cell`]s with coordinate lookup
//! and neighbor enumeration.

use crate::cell::{Cell, Role};
use crate::error::Error;
use crate::geom::{MOORE_OFFSETS, Point};

/// A fixed-size rectangular grid owning every [`Cell`] in a flat arena,
/// indexed row-major (`y * width + x`).
///
/// Cells are created once when the grid is sized and only ever mutated in
/// place; other components refer to them by arena index.
#[derive(Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions (cell units), all cells Empty.
    /// Negative dimensions clamp to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut cells = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Self {
            width: w,
            height: h,
            cells,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Convert a point to its arena index, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// The cell at `p`, or [`Error::OutOfBounds`].
    pub fn cell_at(&self, p: Point) -> Result<&Cell, Error> {
        self.cell(p).ok_or(Error::OutOfBounds(p))
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// The cell at arena index `idx`. Indices obtained from this grid are
    /// always in range.
    #[inline]
    pub fn at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at arena index `idx`.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Iterate over all cells in arena order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Mutably iterate over all cells in arena order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Append the arena indices of `p`'s Moore neighbors to `buf`, in the
    /// fixed [`MOORE_OFFSETS`] order, skipping out-of-bounds and Wall
    /// cells. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<usize>) {
        for d in MOORE_OFFSETS {
            if let Some(i) = self.index_of(p + d) {
                if self.cells[i].role != Role::Wall {
                    buf.push(i);
                }
            }
        }
    }

    /// Set or clear a wall at `p`. Silent no-op out of bounds or on a
    /// terminal cell; idempotent.
    pub fn set_wall(&mut self, p: Point, present: bool) {
        let Some(cell) = self.cell_mut(p) else { return };
        if cell.role.is_terminal() {
            return;
        }
        cell.role = if present { Role::Wall } else { Role::Empty };
    }

    /// Toggle the wall at `p`. Silent no-op out of bounds or on a terminal.
    pub fn toggle_wall(&mut self, p: Point) {
        let Some(cell) = self.cell(p) else { return };
        let present = cell.role == Role::Wall;
        self.set_wall(p, !present);
    }

    /// Revert every Wall cell to Empty.
    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.role == Role::Wall {
                cell.role = Role::Empty;
            }
        }
    }
}
