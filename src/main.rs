//! CLI entry point for the pattern codec and catalogue

use clap::Parser;
use lifecat::io::cli::{Cli, CommandRunner};
use lifecat::io::logging::init_logging;

fn main() -> lifecat::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut runner = CommandRunner::new(cli, std::io::stdout().lock());
    runner.run()
}
