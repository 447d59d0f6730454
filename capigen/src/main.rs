//! Command-line entry point.
//!
//! Usage: `capigen [INPUT] [OUTPUT_DIR]`

use anyhow::Context;
use capigen::{BuiltinTable, Generator, GeneratorConfig, load_ir_file};
use std::path::PathBuf;

const DEFAULT_INPUT: &str = "c_api/taichi.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let mut config = GeneratorConfig::default();
    if let Some(dir) = args.next() {
        config = config.output_dir(dir);
    }

    let ir = load_ir_file(&input, &BuiltinTable::default())
        .with_context(|| format!("failed to load {}", input.display()))?;
    let written = Generator::with_config(&ir, config)
        .write_all()
        .context("binding generation failed")?;

    tracing::info!("wrote {} files", written.len());
    Ok(())
}
