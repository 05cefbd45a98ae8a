// src/io/writer.rs
use std::path::Path;

use gdal::raster::{Buffer, RasterCreationOptions};
use gdal::{DriverManager, Metadata};
use rayon::prelude::*;

use crate::config::NdviConfig;
use crate::error::{IndexError, IndexResult};
use super::reader::GeoInfo;

/// Write an index grid as a tiled, compressed, single-band Float32
/// GeoTIFF carrying the supplied spatial reference.
///
/// Non-finite samples (NaN from 0/0 pixels, infinities) are replaced by
/// the configured no-data sentinel before the write, so the declared
/// no-data metadata matches what is actually on disk. The dataset is
/// flushed and dropped on every exit path.
pub fn write_cog(
    mut ndvi: Buffer<f32>,
    geo_info: &GeoInfo,
    output_path: &Path,
    config: &NdviConfig,
) -> IndexResult<()> {
    let nodata = config.nodata_value;
    ndvi.data_mut().par_iter_mut().for_each(|v| {
        if !v.is_finite() {
            *v = nodata;
        }
    });

    let driver = DriverManager::get_driver_by_name("GTiff")
        .map_err(|e| IndexError::write(output_path, e))?;

    let creation_options = RasterCreationOptions::from_iter([
        format!("COMPRESS={}", config.compress.to_uppercase()),
        "TILED=YES".to_string(),
        format!("BLOCKXSIZE={}", config.block_size),
        format!("BLOCKYSIZE={}", config.block_size),
    ]);

    let mut out_ds = driver
        .create_with_band_type_with_options::<f32, _>(
            output_path,
            geo_info.width,
            geo_info.height,
            1,
            &creation_options,
        )
        .map_err(|e| IndexError::write(output_path, e))?;

    out_ds
        .set_projection(&geo_info.projection)
        .map_err(|e| IndexError::write(output_path, e))?;
    out_ds
        .set_geo_transform(&geo_info.geo_transform)
        .map_err(|e| IndexError::write(output_path, e))?;

    let mut band = out_ds
        .rasterband(1)
        .map_err(|e| IndexError::write(output_path, e))?;
    band.set_no_data_value(Some(nodata as f64))
        .map_err(|e| IndexError::write(output_path, e))?;
    band.set_description("NDVI")
        .map_err(|e| IndexError::write(output_path, e))?;

    let (width, height) = ndvi.shape();
    band.write((0, 0), (width, height), &mut ndvi)
        .map_err(|e| IndexError::write(output_path, e))?;

    out_ds
        .flush_cache()
        .map_err(|e| IndexError::write(output_path, e))?;

    Ok(())
}
