//! Terrain sampling for the flight instruments.
//!
//! Exposes the solidity query the ground probe walks against, the probe
//! itself, and a heightfield sampler for tests and engine-less hosts.

pub mod heightfield;
pub mod probe;
pub mod sampler;

pub use heightfield::Heightfield;
pub use probe::{find_ground, ground_level};
pub use sampler::TerrainSampler;
