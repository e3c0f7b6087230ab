//! Launch the typergym example.

use std::io;

use anyhow::Result;
use clap::Parser;
use malena_demos::typergym::{Args, init_logging, run};

/// Run the typergym example.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log)?;
    let stdin = io::stdin();
    run(&args, stdin.lock(), io::stdout())
}
