//! CLI entry point for the kaleidoscopic chart generator

use clap::Parser;
use kaleidostitch::io::cli::{BundleProcessor, Cli};

fn main() -> kaleidostitch::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    let mut processor = BundleProcessor::new(cli);
    processor.process()
}
