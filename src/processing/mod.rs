// src/processing/mod.rs
pub mod ndvi;

pub use ndvi::compute_ndvi;
