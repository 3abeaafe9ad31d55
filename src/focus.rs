//! Focus navigator
//!
//! Maps a directional keypress onto the navigation grid. Regions form a sparse grid, so a
//! step keeps moving in the direction of travel past on-grid regions that cannot take focus,
//! and stops (keeping the current focus) at the first empty cell or at the edge of the grid.
//!
//! Every step moves one cell along a single axis and the walk is confined to the registry's
//! [`GridBounds`](crate::registry::GridBounds), so it always terminates.

use crate::error::Result;
use crate::registry::WindowRegistry;
use log::debug;

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit grid delta `(dx, dy)`.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Compute the region focused after moving from `current` in `direction`.
///
/// Returns `current` unchanged when the move hits an empty cell or leaves the grid, or when
/// `current` is itself off the grid. Fails only if `current` is not a registry index.
pub fn step(registry: &WindowRegistry, current: usize, direction: Direction) -> Result<usize> {
    let Some(mut coord) = registry.get(current)?.grid() else {
        return Ok(current);
    };
    let Some(bounds) = registry.grid_bounds() else {
        return Ok(current);
    };
    let (dx, dy) = direction.delta();

    loop {
        coord = coord.offset(dx, dy);
        if !bounds.contains(coord) {
            debug!("focus {direction:?}: grid edge reached, staying on {current}");
            return Ok(current);
        }
        match registry.find_by_grid(coord) {
            None => {
                debug!("focus {direction:?}: no region at {coord:?}, staying on {current}");
                return Ok(current);
            }
            Some(next) if registry.get(next)?.is_focusable() => {
                debug!("focus {direction:?}: {current} -> {next}");
                return Ok(next);
            }
            Some(skipped) => {
                debug!("focus {direction:?}: skipping non-focusable region {skipped}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::layout::{compute_layout, SplitRatio};
    use crate::registry::{build_regions, GridCoord, RegionSpec, REGION_SPECS};
    use proptest::prelude::*;

    fn registry_with(specs: &[RegionSpec]) -> WindowRegistry {
        let rects = compute_layout(24, 80, SplitRatio::QUARTER);
        let mut registry = WindowRegistry::new();
        registry.register(build_regions(specs, &rects)).unwrap();
        registry
    }

    fn dashboard() -> WindowRegistry {
        registry_with(&REGION_SPECS)
    }

    #[test]
    fn left_from_main_reaches_library() {
        let registry = dashboard();
        assert_eq!(step(&registry, 3, Direction::Left).unwrap(), 1);
    }

    #[test]
    fn vertical_moves_in_left_column() {
        let registry = dashboard();
        assert_eq!(step(&registry, 0, Direction::Down).unwrap(), 1);
        assert_eq!(step(&registry, 1, Direction::Down).unwrap(), 2);
        assert_eq!(step(&registry, 2, Direction::Up).unwrap(), 1);
        assert_eq!(step(&registry, 1, Direction::Up).unwrap(), 0);
    }

    #[test]
    fn dead_ends_keep_focus() {
        let registry = dashboard();
        // main (1,1): nothing at (1,0), (1,2) or (2,1)
        assert_eq!(step(&registry, 3, Direction::Up).unwrap(), 3);
        assert_eq!(step(&registry, 3, Direction::Down).unwrap(), 3);
        assert_eq!(step(&registry, 3, Direction::Right).unwrap(), 3);
        // search (0,0): edge above and to the left, hole to the right
        assert_eq!(step(&registry, 0, Direction::Up).unwrap(), 0);
        assert_eq!(step(&registry, 0, Direction::Left).unwrap(), 0);
        assert_eq!(step(&registry, 0, Direction::Right).unwrap(), 0);
        // playlists (0,2): bottom edge
        assert_eq!(step(&registry, 2, Direction::Down).unwrap(), 2);
        assert_eq!(step(&registry, 1, Direction::Right).unwrap(), 3);
    }

    #[test]
    fn off_grid_start_stays_put() {
        let registry = dashboard();
        for direction in Direction::ALL {
            assert_eq!(step(&registry, 5, direction).unwrap(), 5);
        }
    }

    #[test]
    fn skips_on_grid_non_focusable_region() {
        let mut specs = REGION_SPECS.to_vec();
        // put the progress bar between library and playlists' column neighbour
        specs[4].grid = Some(GridCoord::new(1, 2));
        specs[2].grid = Some(GridCoord::new(1, 3));
        specs[0].grid = Some(GridCoord::new(1, 0));
        let registry = registry_with(&specs);

        // main (1,1) down -> (1,2) progress (skip) -> (1,3) playlists
        assert_eq!(step(&registry, 3, Direction::Down).unwrap(), 2);
        // playlists up -> skip progress -> main
        assert_eq!(step(&registry, 2, Direction::Up).unwrap(), 3);
    }

    #[test]
    fn non_focusable_run_into_edge_keeps_focus() {
        let mut specs = REGION_SPECS.to_vec();
        specs[4].grid = Some(GridCoord::new(2, 1));
        let registry = registry_with(&specs);
        assert_eq!(step(&registry, 3, Direction::Right).unwrap(), 3);
    }

    #[test]
    fn out_of_range_start_is_an_error() {
        let registry = dashboard();
        assert!(matches!(
            step(&registry, 42, Direction::Up),
            Err(DashboardError::RegionOutOfRange { .. })
        ));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn result_is_focusable_or_unchanged(start in 0usize..6, direction in arb_direction()) {
            let registry = dashboard();
            let next = step(&registry, start, direction).unwrap();
            prop_assert!(next == start || registry.get(next).unwrap().is_focusable());
        }

        #[test]
        fn random_grids_always_terminate(
            coords in prop::collection::vec((-3i16..4, -3i16..4), 6),
            focusable in prop::collection::vec(any::<bool>(), 6),
            start in 0usize..6,
            direction in arb_direction(),
        ) {
            let mut specs = REGION_SPECS.to_vec();
            let mut seen = std::collections::HashSet::new();
            for (idx, spec) in specs.iter_mut().enumerate() {
                let (x, y) = coords[idx];
                spec.grid = seen.insert((x, y)).then_some(GridCoord::new(x, y));
                spec.focusable = focusable[idx];
            }
            let registry = registry_with(&specs);
            let next = step(&registry, start, direction).unwrap();
            prop_assert!(next == start || registry.get(next).unwrap().is_focusable());
        }
    }
}
