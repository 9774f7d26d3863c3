//! CLI entry point for the grid automaton simulator

use clap::Parser;
use hurdlebot::io::cli::{Cli, FileProcessor};

fn main() -> hurdlebot::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
