use clap::Parser;
use listing_mapper::cli::{run, Cli};
use listing_mapper::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level.as_deref()) {
        eprintln!("Logging setup failed: {e}");
        std::process::exit(2);
    }

    if let Err(e) = run(&cli) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
