use anyhow::Result;
use clap::Parser;
use dirsort::cli::{Cli, run_cli};

mod logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing()?;

    run_cli(&cli)?;
    Ok(())
}
