// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::Parser;
use demos::{load_or_bootstrap, DemoError, LogBackdrop, Slideshow};

/// Cycle desktop backgrounds listed in a JSON configuration file.
#[derive(Parser, Debug)]
#[command(name = "slideshow", version, about)]
struct Args {
    /// Configuration file; a default one is written if it does not exist
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Directory relative picture paths are resolved against (default: current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Stop after this many passes over the pictures instead of looping forever
    #[arg(long)]
    cycles: Option<usize>,
}

fn run(args: Args) -> Result<(), DemoError> {
    let config = load_or_bootstrap(&args.config)?;
    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|source| DemoError::Io {
            path: PathBuf::from("."),
            source,
        })?,
    };
    Slideshow::new(config, base_dir, LogBackdrop).run(args.cycles)
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
