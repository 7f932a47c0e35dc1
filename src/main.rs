mod args_parser;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use ljmd::system::System;

use crate::args_parser::Args;

fn init_logger(verbose: u8) {
    // RUST_LOG wins unless a verbosity flag was given explicitly.
    let mut builder = Builder::from_default_env();
    if verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
        let log_level = match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        builder.filter(None, log_level);
    }
    builder
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let source = args.infile.clone().unwrap_or_else(|| String::from("reference configuration"));
    System::new(args.infile)
        .read()
        .with_context(|| format!("failed to read {source}"))?
        .contextualize()
        .context("failed to set up the simulation")?
        .run()
        .context("simulation aborted")?
        .write()
        .context("failed to write final positions")?;

    Ok(())
}
