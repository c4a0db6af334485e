//! CLI entry point for the image-to-RLE tiling tool

use clap::Parser;
use lifetile::io::cli::{Cli, FileProcessor};

fn main() -> lifetile::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
