//! The world solidity accessor the instruments query.

use flightdeck_core::types::GridPos;

/// Read-only view of the world terrain.
///
/// Implementations must be total (answer for any cell down to the floor) and
/// side-effect-free. The ground probe calls `is_solid` once per cell on its
/// way down and relies on `floor_y` to terminate over a void.
pub trait TerrainSampler {
    /// Whether the cell at `pos` is solid (non-air).
    fn is_solid(&self, pos: GridPos) -> bool;

    /// Minimum vertical coordinate of the world; below this is bottomless.
    fn floor_y(&self) -> i32;
}
