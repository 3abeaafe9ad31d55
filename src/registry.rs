//! Window registry
//!
//! Owns the ordered set of dashboard regions. Each region pairs static metadata
//! ([`RegionSpec`]) with the rectangle computed by the layout engine and an owned drawing
//! surface. The registry is only ever replaced as a whole: a resize builds a fresh set of
//! regions and swaps it in with [`WindowRegistry::register`].

use crate::error::{DashboardError, Result};
use crate::layout::REGION_COUNT;
use crate::render::ui::theme::ColorRole;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Logical identity of a region, independent of where it sits in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionRole {
    Search,
    Library,
    Playlists,
    Main,
    Progress,
    Help,
}

/// Position on the abstract navigation grid (column `x`, row `y`).
///
/// Regions outside the grid carry no coordinate at all (`Option<GridCoord>::None`), so they
/// can never be returned by a coordinate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: i16,
    pub y: i16,
}

impl GridCoord {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Shift by a unit delta, saturating at the i16 limits.
    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Inclusive bounding box of every grid coordinate in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min: GridCoord,
    pub max: GridCoord,
}

impl GridBounds {
    pub fn contains(&self, coord: GridCoord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x) && (self.min.y..=self.max.y).contains(&coord.y)
    }
}

/// Static metadata that survives every resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpec {
    pub role: RegionRole,
    pub title: Option<&'static str>,
    pub grid: Option<GridCoord>,
    pub focusable: bool,
    pub focus_role: ColorRole,
    pub unfocus_role: ColorRole,
}

/// Metadata for the six dashboard regions, in layout index order.
pub const REGION_SPECS: [RegionSpec; REGION_COUNT] = [
    RegionSpec {
        role: RegionRole::Search,
        title: Some("Search"),
        grid: Some(GridCoord::new(0, 0)),
        focusable: true,
        focus_role: ColorRole::SearchAccent,
        unfocus_role: ColorRole::Idle,
    },
    RegionSpec {
        role: RegionRole::Library,
        title: Some("Library"),
        grid: Some(GridCoord::new(0, 1)),
        focusable: true,
        focus_role: ColorRole::LibraryAccent,
        unfocus_role: ColorRole::Idle,
    },
    RegionSpec {
        role: RegionRole::Playlists,
        title: Some("Playlists"),
        grid: Some(GridCoord::new(0, 2)),
        focusable: true,
        focus_role: ColorRole::PlaylistAccent,
        unfocus_role: ColorRole::Idle,
    },
    RegionSpec {
        role: RegionRole::Main,
        title: Some("Welcome!"),
        grid: Some(GridCoord::new(1, 1)),
        focusable: true,
        focus_role: ColorRole::MainAccent,
        unfocus_role: ColorRole::Idle,
    },
    RegionSpec {
        role: RegionRole::Progress,
        title: Some("Progress Bar"),
        grid: None,
        focusable: false,
        focus_role: ColorRole::ProgressAccent,
        unfocus_role: ColorRole::Idle,
    },
    RegionSpec {
        role: RegionRole::Help,
        title: Some("Help"),
        grid: None,
        focusable: false,
        focus_role: ColorRole::HelpAccent,
        unfocus_role: ColorRole::Idle,
    },
];

/// Index of the region focused at startup (main content).
pub const INITIAL_FOCUS: usize = 3;

/// Off-screen drawing target owned by exactly one region.
///
/// The buffer covers the region's bounds in absolute terminal coordinates, so widgets can be
/// rendered into it with the region rectangle unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    buffer: Buffer,
}

impl Surface {
    fn new(bounds: Rect) -> Self {
        Self {
            buffer: Buffer::empty(bounds),
        }
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Wipe previous contents before repainting.
    pub fn clear(&mut self) {
        self.buffer.reset();
    }
}

/// One tiled area of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    spec: RegionSpec,
    bounds: Rect,
    surface: Surface,
}

impl Region {
    pub fn new(spec: RegionSpec, bounds: Rect) -> Self {
        Self {
            spec,
            bounds,
            surface: Surface::new(bounds),
        }
    }

    pub fn spec(&self) -> &RegionSpec {
        &self.spec
    }

    pub fn role(&self) -> RegionRole {
        self.spec.role
    }

    pub fn title(&self) -> Option<&'static str> {
        self.spec.title
    }

    pub fn grid(&self) -> Option<GridCoord> {
        self.spec.grid
    }

    pub fn is_focusable(&self) -> bool {
        self.spec.focusable
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

/// Build regions from layout rectangles and static metadata, pairing them by index.
pub fn build_regions(specs: &[RegionSpec], rects: &[Rect]) -> Vec<Region> {
    specs
        .iter()
        .zip(rects)
        .map(|(spec, rect)| Region::new(spec.clone(), *rect))
        .collect()
}

/// Ordered collection of regions; insertion order is index order.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    regions: Vec<Region>,
    generation: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set of regions.
    ///
    /// The new set is validated first; on error the previous regions stay in place. On
    /// success the old regions (and their surfaces) are dropped in one step.
    pub fn register(&mut self, regions: Vec<Region>) -> Result<()> {
        validate_grid(&regions)?;
        self.regions = regions;
        self.generation += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Region> {
        self.regions
            .get(index)
            .ok_or(DashboardError::RegionOutOfRange {
                index,
                count: self.regions.len(),
            })
    }

    /// First region whose grid coordinate equals `coord`.
    pub fn find_by_grid(&self, coord: GridCoord) -> Option<usize> {
        self.regions
            .iter()
            .position(|region| region.grid() == Some(coord))
    }

    /// Bounding box of all on-grid regions, `None` if no region is on the grid.
    pub fn grid_bounds(&self) -> Option<GridBounds> {
        let mut coords = self.regions.iter().filter_map(Region::grid);
        let first = coords.next()?;
        Some(coords.fold(
            GridBounds {
                min: first,
                max: first,
            },
            |bounds, c| GridBounds {
                min: GridCoord::new(bounds.min.x.min(c.x), bounds.min.y.min(c.y)),
                max: GridCoord::new(bounds.max.x.max(c.x), bounds.max.y.max(c.y)),
            },
        ))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Region> {
        self.regions.iter_mut()
    }

    /// Number of successful `register` calls; bumps every time surfaces are replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn validate_grid(regions: &[Region]) -> Result<()> {
    for (idx, region) in regions.iter().enumerate() {
        if let Some(coord) = region.grid() {
            if regions[..idx].iter().any(|other| other.grid() == Some(coord)) {
                return Err(DashboardError::DuplicateGridCoordinate {
                    x: coord.x,
                    y: coord.y,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute_layout, SplitRatio};

    fn dashboard(height: u16, width: u16) -> WindowRegistry {
        let mut registry = WindowRegistry::new();
        let rects = compute_layout(height, width, SplitRatio::QUARTER);
        registry
            .register(build_regions(&REGION_SPECS, &rects))
            .unwrap();
        registry
    }

    #[test]
    fn registers_six_regions_in_layout_order() {
        let registry = dashboard(24, 80);
        assert_eq!(registry.len(), 6);
        let roles: Vec<_> = registry.iter().map(Region::role).collect();
        assert_eq!(
            roles,
            vec![
                RegionRole::Search,
                RegionRole::Library,
                RegionRole::Playlists,
                RegionRole::Main,
                RegionRole::Progress,
                RegionRole::Help,
            ]
        );
        assert_eq!(registry.get(0).unwrap().bounds(), Rect::new(0, 0, 60, 3));
        assert_eq!(registry.get(3).unwrap().surface().area(), Rect::new(20, 3, 60, 15));
        assert_eq!(registry.get(INITIAL_FOCUS).unwrap().role(), RegionRole::Main);
    }

    #[test]
    fn get_out_of_range_fails() {
        let registry = dashboard(24, 80);
        match registry.get(6) {
            Err(DashboardError::RegionOutOfRange { index, count }) => {
                assert_eq!((index, count), (6, 6));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn find_by_grid_matches_static_table() {
        let registry = dashboard(24, 80);
        assert_eq!(registry.find_by_grid(GridCoord::new(0, 0)), Some(0));
        assert_eq!(registry.find_by_grid(GridCoord::new(0, 1)), Some(1));
        assert_eq!(registry.find_by_grid(GridCoord::new(0, 2)), Some(2));
        assert_eq!(registry.find_by_grid(GridCoord::new(1, 1)), Some(3));
        assert_eq!(registry.find_by_grid(GridCoord::new(1, 0)), None);
        // off-grid regions are unreachable, including by the old sentinel value
        assert_eq!(registry.find_by_grid(GridCoord::new(-1, -1)), None);
    }

    #[test]
    fn grid_bounds_cover_on_grid_regions_only() {
        let registry = dashboard(24, 80);
        let bounds = registry.grid_bounds().unwrap();
        assert_eq!(bounds.min, GridCoord::new(0, 0));
        assert_eq!(bounds.max, GridCoord::new(1, 2));
        assert!(!bounds.contains(GridCoord::new(-1, -1)));
        assert!(WindowRegistry::new().grid_bounds().is_none());
    }

    #[test]
    fn register_replaces_everything_and_bumps_generation() {
        let mut registry = dashboard(24, 80);
        assert_eq!(registry.generation(), 1);

        let rects = compute_layout(40, 120, SplitRatio::QUARTER);
        registry
            .register(build_regions(&REGION_SPECS, &rects))
            .unwrap();

        assert_eq!(registry.generation(), 2);
        assert_eq!(registry.get(4).unwrap().bounds(), Rect::new(0, 34, 120, 6));
        assert_eq!(registry.get(4).unwrap().surface().area(), Rect::new(0, 34, 120, 6));
    }

    #[test]
    fn duplicate_grid_coordinates_are_rejected_atomically() {
        let mut registry = dashboard(24, 80);
        let mut specs = REGION_SPECS.to_vec();
        specs[2].grid = Some(GridCoord::new(0, 1));
        let rects = compute_layout(30, 100, SplitRatio::QUARTER);

        let err = registry.register(build_regions(&specs, &rects)).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::DuplicateGridCoordinate { x: 0, y: 1 }
        ));
        // previous set untouched
        assert_eq!(registry.generation(), 1);
        assert_eq!(registry.get(0).unwrap().bounds(), Rect::new(0, 0, 60, 3));
    }
}
