// src/config.rs
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Pipeline configuration. Every field has a default matching the
/// Sentinel-2 L2A 10 m red/NIR band pair and standard COG layout, so an
/// empty JSON object (or no file at all) yields a working configuration.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NdviConfig {
    /// Filename suffix used to locate the red band.
    #[serde(default = "default_red_pattern")]
    pub red_pattern: String,
    /// Filename suffix used to locate the near-infrared band.
    #[serde(default = "default_nir_pattern")]
    pub nir_pattern: String,
    /// Internal tile dimension of the output raster.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Output compression scheme (any GTiff COMPRESS value).
    #[serde(default = "default_compress")]
    pub compress: String,
    /// Sentinel written in place of invalid pixels.
    #[serde(default = "default_nodata")]
    pub nodata_value: f32,
}

fn default_red_pattern() -> String {
    "B04_10m".to_string()
}

fn default_nir_pattern() -> String {
    "B08_10m".to_string()
}

fn default_block_size() -> usize {
    512
}

fn default_compress() -> String {
    "LZW".to_string()
}

fn default_nodata() -> f32 {
    -9999.0
}

impl Default for NdviConfig {
    fn default() -> Self {
        Self {
            red_pattern: default_red_pattern(),
            nir_pattern: default_nir_pattern(),
            block_size: default_block_size(),
            compress: default_compress(),
            nodata_value: default_nodata(),
        }
    }
}

impl NdviConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read parameter file {}", path.display()))?;
        let config: NdviConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid parameter file {}", path.display()))?;
        Ok(config)
    }
}
