// src/io/mod.rs
pub mod locator;
pub mod reader;
pub mod writer;

pub use locator::find_band;
pub use reader::{read_band, GeoInfo};
pub use writer::write_cog;
