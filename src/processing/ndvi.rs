// src/processing/ndvi.rs
use gdal::raster::Buffer;
use rayon::prelude::*;

use crate::error::{IndexError, IndexResult};

/// Compute NDVI `(NIR - RED) / (NIR + RED)` elementwise.
///
/// Both grids must have identical shape; a mismatch is rejected rather
/// than truncated. Division follows IEEE semantics, so zero-sum pixels
/// come out as NaN (0/0) or infinity without faulting. The writer maps
/// every non-finite sample to the configured no-data sentinel, so this
/// function never needs a sentinel of its own.
pub fn compute_ndvi(red: &Buffer<f32>, nir: &Buffer<f32>) -> IndexResult<Buffer<f32>> {
    let shape = red.shape();
    if shape != nir.shape() {
        return Err(IndexError::ShapeMismatch {
            red_shape: shape,
            nir_shape: nir.shape(),
        });
    }

    let red_data = red.data();
    let nir_data = nir.data();

    let mut result = vec![0.0f32; shape.0 * shape.1];
    result
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, out)| *out = (nir_data[i] - red_data[i]) / (nir_data[i] + red_data[i]));

    Ok(Buffer::new(shape, result))
}
