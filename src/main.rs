// src/main.rs
use anyhow::{ensure, Result};
use clap::Parser;

mod cli;
mod config;
mod error;
mod io;
mod pipeline;
mod processing;

use crate::cli::Cli;
use crate::pipeline::NdviPipeline;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    ensure!(
        cli.input_dir.is_dir(),
        "input directory {} does not exist",
        cli.input_dir.display()
    );

    let config = cli.build_config()?;
    let pipeline = NdviPipeline::new(config);
    let output_path = pipeline.run(&cli.input_dir, &cli.output)?;

    println!("Processing complete: {}", output_path.display());
    Ok(())
}
