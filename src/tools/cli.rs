use clap::Parser;
use log::LevelFilter;

/// Command line options.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "huffzip, an interactive Huffman text compressor.",
    long_about = "\
huffzip keeps a registry of named texts and compresses them with classic
Huffman coding. Start it and type `help` for the list of commands. The
program reads commands from standard input until end of input (ctrl+D)."
)]
pub struct HuffOpts {
    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', parse(from_occurrences))]
    pub verbose: usize,
}

impl HuffOpts {
    /// Map the -q/-v flags onto a log level.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
