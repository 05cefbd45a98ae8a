// src/pipeline.rs
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::NdviConfig;
use crate::error::IndexResult;
use crate::io::{find_band, read_band, write_cog};
use crate::processing::compute_ndvi;

/// Default output file name when the output argument is a directory.
pub const DEFAULT_OUTPUT_NAME: &str = "s2_ndvi_10m.tif";

/// One NDVI run over a single product directory: locate both bands,
/// read them, compute the index, write the COG.
///
/// Precondition: the red and NIR bands are assumed co-registered (same
/// grid, same projection). The output inherits the red band's spatial
/// reference; the NIR band's own georeferencing is only checked against
/// it to warn on disagreement, never to abort.
pub struct NdviPipeline {
    config: NdviConfig,
}

impl NdviPipeline {
    pub fn new(config: NdviConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NdviConfig {
        &self.config
    }

    /// Run the pipeline. Returns the path of the written raster.
    pub fn run(&self, input_dir: &Path, output: &Path) -> IndexResult<PathBuf> {
        let output_path = resolve_output_path(output);

        // Multiple matches are legal; the first (sorted) one wins.
        let red_path = find_band(input_dir, &self.config.red_pattern)?.remove(0);
        let nir_path = find_band(input_dir, &self.config.nir_pattern)?.remove(0);
        info!("red band:  {}", red_path.display());
        info!("nir band:  {}", nir_path.display());

        let (red, geo_info) = read_band(&red_path)?;
        let (nir, nir_geo) = read_band(&nir_path)?;
        info!("read {}x{} pixels per band", geo_info.width, geo_info.height);

        if nir_geo.geo_transform != geo_info.geo_transform {
            warn!(
                "nir band geotransform {:?} differs from red {:?}; output keeps the red band's",
                nir_geo.geo_transform, geo_info.geo_transform
            );
        }

        let ndvi = compute_ndvi(&red, &nir)?;

        write_cog(ndvi, &geo_info, &output_path, &self.config)?;
        info!("wrote {}", output_path.display());

        Ok(output_path)
    }
}

fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_OUTPUT_NAME)
    } else {
        output.to_path_buf()
    }
}
