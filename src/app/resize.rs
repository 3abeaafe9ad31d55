//! Resize handling: recompute the layout and swap in a fresh registry.
//!
//! Only the registry changes. Focus and mode live in `AppState` and are indexed by stable
//! region positions, so replacing every surface leaves the focused logical region intact.

use crate::error::Result;
use crate::layout::{
    addressable_size, compute_layout, exceeds_addressable, is_degraded, SplitRatio,
};
use crate::registry::{build_regions, RegionSpec, WindowRegistry};
use log::{info, warn};

/// Rebuild `registry` for a `width` x `height` terminal using `specs` as static metadata.
pub fn rebuild_registry(
    registry: &mut WindowRegistry,
    specs: &[RegionSpec],
    ratio: SplitRatio,
    width: u16,
    height: u16,
) -> Result<()> {
    let (width, height) = if exceeds_addressable(width, height) {
        let (clamped_width, clamped_height) = addressable_size(width, height);
        warn!(
            "terminal {width}x{height} exceeds the drawable area, layout clamped to \
             {clamped_width}x{clamped_height}"
        );
        (clamped_width, clamped_height)
    } else {
        (width, height)
    };

    if is_degraded(height, width) {
        warn!("terminal {width}x{height} is below the minimum size, layout degraded");
    }

    let rects = compute_layout(height, width, ratio);
    registry.register(build_regions(specs, &rects))?;
    info!(
        "layout rebuilt for {width}x{height} (generation {})",
        registry.generation()
    );
    Ok(())
}
