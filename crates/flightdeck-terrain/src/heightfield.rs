//! Heightfield: a column map with solidity queries.

use flightdeck_core::types::GridPos;

use crate::sampler::TerrainSampler;

/// Rectangular column map for tests and engine-less hosts.
///
/// Each (x,z) column has a surface height; every cell from the floor up to
/// and including that height is solid. Columns outside the map are air all
/// the way down. Columns can be marked bottomless to punch holes.
#[derive(Debug, Clone)]
pub struct Heightfield {
    /// West edge column (inclusive).
    origin_x: i32,
    /// North edge column (inclusive).
    origin_z: i32,
    /// Number of columns east-west.
    width: u32,
    /// Number of columns north-south.
    depth: u32,
    /// Minimum vertical coordinate of the world.
    floor_y: i32,
    /// Surface height per column, x-major within each z row.
    /// `None` marks a bottomless column.
    surfaces: Vec<Option<i32>>,
}

impl Heightfield {
    /// Level terrain: every column's surface at `surface_y`.
    pub fn flat(
        origin_x: i32,
        origin_z: i32,
        width: u32,
        depth: u32,
        floor_y: i32,
        surface_y: i32,
    ) -> Self {
        Self {
            origin_x,
            origin_z,
            width,
            depth,
            floor_y,
            surfaces: vec![Some(surface_y); (width * depth) as usize],
        }
    }

    /// Terrain from explicit per-column surfaces, x-major within each z row.
    /// `surfaces` must hold `width * depth` entries.
    pub fn from_surfaces(
        origin_x: i32,
        origin_z: i32,
        width: u32,
        depth: u32,
        floor_y: i32,
        surfaces: Vec<Option<i32>>,
    ) -> Self {
        Self {
            origin_x,
            origin_z,
            width,
            depth,
            floor_y,
            surfaces,
        }
    }

    /// Overwrite one column's surface; `None` makes the column bottomless.
    pub fn set_surface(&mut self, x: i32, z: i32, surface: Option<i32>) {
        if let Some(idx) = self.index(x, z) {
            self.surfaces[idx] = surface;
        }
    }

    /// Surface height of the column containing (x,z), if in bounds and not
    /// bottomless.
    pub fn surface(&self, x: i32, z: i32) -> Option<i32> {
        self.index(x, z).and_then(|idx| self.surfaces[idx])
    }

    fn index(&self, x: i32, z: i32) -> Option<usize> {
        let col = x.checked_sub(self.origin_x)?;
        let row = z.checked_sub(self.origin_z)?;
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.depth as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }
}

impl TerrainSampler for Heightfield {
    fn is_solid(&self, pos: GridPos) -> bool {
        if pos.y < self.floor_y {
            return false;
        }
        match self.surface(pos.x, pos.z) {
            Some(surface) => pos.y <= surface,
            None => false,
        }
    }

    fn floor_y(&self) -> i32 {
        self.floor_y
    }
}
