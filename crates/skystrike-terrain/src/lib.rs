//! Terrain queries for SKYSTRIKE.
//!
//! The simulation only ever asks one question of terrain: the surface
//! height under a lon/lat. `TerrainSampler` is that seam; the host plugs
//! in whatever its streaming globe provides. `None` means "tile not
//! resident yet" — callers skip ground checks for that tick rather than
//! guessing.

pub use skystrike_core as core;

pub mod grid;

pub use grid::HeightGrid;

/// Surface height source.
pub trait TerrainSampler {
    /// Terrain height in meters above sea level, or None if no data is
    /// available for this position yet.
    fn height_at(&self, lon: f64, lat: f64) -> Option<f64>;
}

/// Constant-height terrain. The zero-height default stands in for open
/// ocean and is the engine's fallback sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain {
    pub height: f64,
}

impl FlatTerrain {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl TerrainSampler for FlatTerrain {
    fn height_at(&self, _lon: f64, _lat: f64) -> Option<f64> {
        Some(self.height)
    }
}

/// Terrain that reports "no data" everywhere — exercises the not-ready
/// path in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerrain;

impl TerrainSampler for NoTerrain {
    fn height_at(&self, _lon: f64, _lat: f64) -> Option<f64> {
        None
    }
}
