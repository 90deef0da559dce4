//! HeightGrid: raster heightmap with bilinear elevation queries.

use serde::{Deserialize, Serialize};

use crate::TerrainSampler;

/// Grid header metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridHeader {
    /// Southwest corner latitude (degrees).
    pub origin_lat: f64,
    /// Southwest corner longitude (degrees).
    pub origin_lon: f64,
    /// Degrees per grid cell.
    pub cell_deg: f64,
    /// Number of columns (west to east).
    pub width: u32,
    /// Number of rows (south to north).
    pub height: u32,
}

impl GridHeader {
    /// North edge latitude (degrees).
    pub fn north_lat(&self) -> f64 {
        self.origin_lat + self.height as f64 * self.cell_deg
    }

    /// East edge longitude (degrees).
    pub fn east_lon(&self) -> f64 {
        self.origin_lon + self.width as f64 * self.cell_deg
    }
}

/// Loaded heightmap covering one geographic tile.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    pub header: GridHeader,
    /// Elevation values in meters, row-major (south-to-north, west-to-east).
    pub elevations: Vec<i16>,
}

impl HeightGrid {
    /// Create a HeightGrid from pre-loaded data.
    ///
    /// Returns None if the elevation buffer doesn't match the header.
    pub fn new(header: GridHeader, elevations: Vec<i16>) -> Option<Self> {
        if elevations.len() != (header.width as usize) * (header.height as usize) {
            return None;
        }
        Some(Self { header, elevations })
    }

    /// Convert lon/lat to grid row/col (fractional).
    /// Returns None if outside grid bounds.
    fn geo_to_grid(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let h = &self.header;
        let col = (lon - h.origin_lon) / h.cell_deg;
        let row = (lat - h.origin_lat) / h.cell_deg;
        if col < 0.0 || row < 0.0 || col >= h.width as f64 || row >= h.height as f64 {
            return None;
        }
        Some((row, col))
    }

    /// Raw elevation at integer grid coordinates.
    fn raw_elevation(&self, row: usize, col: usize) -> i16 {
        let h = &self.header;
        if row >= h.height as usize || col >= h.width as usize {
            return 0;
        }
        self.elevations[row * h.width as usize + col]
    }

    /// Bilinear interpolation at fractional row/col.
    fn bilinear(&self, row: f64, col: f64) -> f64 {
        let r0 = row.floor() as usize;
        let c0 = col.floor() as usize;
        let r1 = (r0 + 1).min(self.header.height as usize - 1);
        let c1 = (c0 + 1).min(self.header.width as usize - 1);

        let fr = row - r0 as f64;
        let fc = col - c0 as f64;

        let e00 = self.raw_elevation(r0, c0) as f64;
        let e01 = self.raw_elevation(r0, c1) as f64;
        let e10 = self.raw_elevation(r1, c0) as f64;
        let e11 = self.raw_elevation(r1, c1) as f64;

        let south = e00 * (1.0 - fc) + e01 * fc;
        let north = e10 * (1.0 - fc) + e11 * fc;
        south * (1.0 - fr) + north * fr
    }
}

impl TerrainSampler for HeightGrid {
    fn height_at(&self, lon: f64, lat: f64) -> Option<f64> {
        let (row, col) = self.geo_to_grid(lon, lat)?;
        Some(self.bilinear(row, col))
    }
}
