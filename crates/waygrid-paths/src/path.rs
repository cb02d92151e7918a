//! Route extraction from predecessor links.

use waygrid_core::{Error, Grid, Point};

/// Walk predecessor links back from `end` and return the route ordered
/// Start→End.
///
/// Fails with [`Error::NoPath`] when `end` was never reached, meaning it
/// has no predecessor and is not the zero-cost start cell, and with
/// [`Error::CorruptState`] if the chain fails to terminate within
/// `width * height` hops. A cycle cannot occur while the relaxation
/// invariants hold, but a runaway chain must not loop forever.
pub fn backtrace(grid: &Grid, end: Point) -> Result<Vec<Point>, Error> {
    let idx = grid.index_of(end).ok_or(Error::OutOfBounds(end))?;

    let cell = grid.at(idx);
    if cell.search.predecessor.is_none() && cell.search.path_cost != 0.0 {
        return Err(Error::NoPath);
    }

    let mut path = Vec::new();
    let mut cursor = Some(idx);
    let mut hops = 0usize;
    while let Some(ci) = cursor {
        hops += 1;
        if hops > grid.len() {
            return Err(Error::CorruptState);
        }
        let cell = grid.at(ci);
        path.push(cell.pos());
        cursor = cell.search.predecessor;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::TerminalSet;

    use crate::engine::{SearchEngine, Status};

    #[test]
    fn errors_before_any_search() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            backtrace(&grid, Point::new(2, 2)).unwrap_err(),
            Error::NoPath
        );
    }

    #[test]
    fn errors_out_of_bounds() {
        let grid = Grid::new(3, 3);
        let p = Point::new(5, 0);
        assert_eq!(backtrace(&grid, p).unwrap_err(), Error::OutOfBounds(p));
    }

    #[test]
    fn start_alone_is_a_single_cell_route() {
        // The zero-cost start cell backtraces to itself even with no
        // predecessor set.
        let mut grid = Grid::new(2, 1);
        grid.at_mut(0).search.path_cost = 0.0;
        let path = backtrace(&grid, Point::new(0, 0)).unwrap();
        assert_eq!(path, vec![Point::new(0, 0)]);
    }

    #[test]
    fn walks_and_reverses_the_chain() {
        let mut grid = Grid::new(3, 1);
        grid.at_mut(0).search.path_cost = 0.0;
        grid.at_mut(1).search.path_cost = 1.0;
        grid.at_mut(1).search.predecessor = Some(0);
        grid.at_mut(2).search.path_cost = 2.0;
        grid.at_mut(2).search.predecessor = Some(1);

        let path = backtrace(&grid, Point::new(2, 0)).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn detects_runaway_chains() {
        let mut grid = Grid::new(2, 1);
        // A two-cell predecessor cycle; must be caught, not looped.
        grid.at_mut(0).search.predecessor = Some(1);
        grid.at_mut(1).search.predecessor = Some(0);
        assert_eq!(
            backtrace(&grid, Point::new(1, 0)).unwrap_err(),
            Error::CorruptState
        );
    }

    #[test]
    fn route_from_a_real_search() {
        let mut grid = Grid::new(4, 3);
        let mut terminals = TerminalSet::new();
        terminals.set(&mut grid, Point::new(0, 1));
        terminals.set(&mut grid, Point::new(3, 1));
        grid.set_wall(Point::new(1, 1), true);

        let mut engine = SearchEngine::new();
        engine.start(&mut grid, &terminals).unwrap();
        let mut guard = 0;
        while !engine.step(&mut grid).is_settled() {
            guard += 1;
            assert!(guard < 10_000);
        }
        assert_eq!(engine.status(), Status::Found);

        let path = backtrace(&grid, Point::new(3, 1)).unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 1)));
        assert_eq!(path.last(), Some(&Point::new(3, 1)));
        // The wall cell is never part of the route.
        assert!(!path.contains(&Point::new(1, 1)));
    }
}
