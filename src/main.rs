//! CLI entry point for procedurally tiled artwork generation

use clap::Parser;
use modern_art::io::cli::{ArtworkProcessor, Cli};
use modern_art::io::logging;

fn main() -> modern_art::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let processor = ArtworkProcessor::new(cli);
    processor.process()?;
    Ok(())
}
