// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::config::NdviConfig;

#[derive(Parser)]
#[command(name = "s2-ndvi")]
#[command(version)]
#[command(about = "Compute NDVI from a Sentinel-2 product and write a cloud-optimized GeoTIFF")]
pub struct Cli {
    /// Sentinel-2 product directory (e.g. an unpacked .SAFE folder)
    pub input_dir: PathBuf,

    /// Output file, or an existing directory to use the default file name
    pub output: PathBuf,

    /// JSON parameter file; individual flags below override its values
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Filename suffix of the red band
    #[arg(long, value_name = "PATTERN")]
    pub red_pattern: Option<String>,

    /// Filename suffix of the near-infrared band
    #[arg(long, value_name = "PATTERN")]
    pub nir_pattern: Option<String>,

    /// Internal tile size of the output raster
    #[arg(long, value_name = "PIXELS")]
    pub block_size: Option<usize>,

    /// GTiff compression scheme (LZW, DEFLATE, ZSTD, NONE, ...)
    #[arg(long, value_name = "SCHEME")]
    pub compress: Option<String>,

    /// No-data sentinel for invalid pixels
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub nodata: Option<f32>,
}

impl Cli {
    /// Assemble the effective configuration: defaults, overlaid by the
    /// parameter file if given, overlaid by explicit flags.
    pub fn build_config(&self) -> anyhow::Result<NdviConfig> {
        let mut config = match &self.params {
            Some(path) => NdviConfig::from_file(path)?,
            None => NdviConfig::default(),
        };

        if let Some(pattern) = &self.red_pattern {
            config.red_pattern = pattern.clone();
        }
        if let Some(pattern) = &self.nir_pattern {
            config.nir_pattern = pattern.clone();
        }
        if let Some(size) = self.block_size {
            config.block_size = size;
        }
        if let Some(compress) = &self.compress {
            config.compress = compress.clone();
        }
        if let Some(nodata) = self.nodata {
            config.nodata_value = nodata;
        }

        Ok(config)
    }
}
