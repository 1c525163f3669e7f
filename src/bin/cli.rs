// src/bin/cli.rs
use bookshelf::{cli, logging};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    logging::init(args.verbose);
    cli::run(args)
}
