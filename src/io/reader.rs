// src/io/reader.rs
use std::path::Path;

use gdal::raster::Buffer;
use gdal::Dataset;

use crate::error::{IndexError, IndexResult};

/// Spatial reference metadata carried alongside a band grid.
#[derive(Debug, Clone)]
pub struct GeoInfo {
    pub projection: String,
    pub geo_transform: [f64; 6],
    pub width: usize,
    pub height: usize,
}

/// Read band 1 of a raster file as f32 at native resolution.
///
/// The dataset handle is dropped before returning, on success and on
/// every error path.
pub fn read_band(path: &Path) -> IndexResult<(Buffer<f32>, GeoInfo)> {
    let dataset = Dataset::open(path).map_err(|e| IndexError::read(path, e))?;

    if dataset.raster_count() == 0 {
        return Err(IndexError::read(path, "raster has no bands"));
    }

    let (width, height) = dataset.raster_size();
    let projection = dataset.projection();
    let geo_transform = dataset
        .geo_transform()
        .map_err(|e| IndexError::read(path, e))?;

    let band = dataset.rasterband(1).map_err(|e| IndexError::read(path, e))?;
    let grid = band
        .read_as::<f32>((0, 0), (width, height), (width, height), None)
        .map_err(|e| IndexError::read(path, e))?;

    let geo_info = GeoInfo {
        projection,
        geo_transform,
        width,
        height,
    };

    Ok((grid, geo_info))
}
