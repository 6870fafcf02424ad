//! Downward ground search.
//!
//! Walks cell by cell from the actor toward the world floor and reports the
//! first solid cell. The scan has no step bound of its own; the sampler's
//! finite floor is what terminates it over a void.

use flightdeck_core::types::GridPos;

use crate::sampler::TerrainSampler;

/// Find the first solid cell strictly below `from`.
///
/// The cell at the actor's own height is not consulted. Returns `None` once
/// the scan passes the sampler's floor without a hit.
pub fn find_ground<T: TerrainSampler>(terrain: &T, from: GridPos) -> Option<GridPos> {
    let mut pos = from.down();
    while pos.y >= terrain.floor_y() {
        if terrain.is_solid(pos) {
            return Some(pos);
        }
        pos = pos.down();
    }
    None
}

/// Vertical coordinate of the ground under `from`, if any.
pub fn ground_level<T: TerrainSampler>(terrain: &T, from: GridPos) -> Option<i32> {
    find_ground(terrain, from).map(|pos| pos.y)
}
