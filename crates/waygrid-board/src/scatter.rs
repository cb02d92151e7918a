//! Random obstacle seeding.

use rand::Rng;
use rand::RngExt;

use waygrid_core::Role;

use crate::board::Board;

impl Board {
    /// Turn each Empty cell into a Wall with probability `wall_pct`
    /// (clamped to `0.0..=1.0`), leaving terminals and existing walls
    /// alone. No-op while a search is running. Returns the number of
    /// walls placed.
    pub fn scatter_walls(&mut self, rng: &mut impl Rng, wall_pct: f64) -> usize {
        if !self.editable() {
            return 0;
        }
        let wall_pct = wall_pct.clamp(0.0, 1.0);
        let mut placed = 0;
        for cell in self.grid.cells_mut() {
            if cell.role == Role::Empty && rng.random::<f64>() < wall_pct {
                cell.role = Role::Wall;
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use waygrid_core::Point;

    use crate::board::Board;
    use waygrid_core::Role;

    #[test]
    fn zero_density_places_nothing() {
        let mut board = Board::new(8, 8);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(board.scatter_walls(&mut rng, 0.0), 0);
    }

    #[test]
    fn full_density_fills_everything_but_terminals() {
        let mut board = Board::new(6, 6);
        board.set_terminal(Point::new(0, 0));
        board.set_terminal(Point::new(5, 5));
        let mut rng = StdRng::seed_from_u64(42);
        let placed = board.scatter_walls(&mut rng, 1.0);
        assert_eq!(placed, 34);
        assert!(board.cell_role(Point::new(0, 0)).unwrap().is_terminal());
        assert!(board.cell_role(Point::new(5, 5)).unwrap().is_terminal());
        assert_eq!(board.cell_role(Point::new(3, 3)).unwrap(), Role::Wall);
    }

    #[test]
    fn rejected_while_running() {
        let mut board = Board::new(4, 4);
        board.set_terminal(Point::new(0, 0));
        board.set_terminal(Point::new(3, 3));
        board.start().unwrap();
        board.step();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(board.scatter_walls(&mut rng, 1.0), 0);
    }

    #[test]
    fn out_of_range_density_clamps() {
        let mut board = Board::new(4, 4);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(board.scatter_walls(&mut rng, 17.0), 16);
    }
}
