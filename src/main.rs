//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io;

use clap::Parser;
use log::info;
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::registry::Registry;
use huffzip::tools::cli::HuffOpts;
use huffzip::tools::repl;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    let opts = HuffOpts::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Logs go to stderr; the command loop owns stdout.
    TermLogger::init(
        opts.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut registry = Registry::new();
    repl::run(&mut registry, &mut stdin.lock(), &mut stdout.lock())?;

    info!("Done.\n");
    Ok(())
}
