// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod processing;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
