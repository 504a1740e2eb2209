mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::PlotError;

/// Stderr subscriber; `RUST_LOG` wins, otherwise `warn` (or `debug` with
/// `--debug`).
fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<(), PlotError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.debug);
    match cli.cmd {
        parse::Command::Csv(a) => handlers::csv(&a, cli.debug),
        parse::Command::Heatmap(a) => handlers::heatmap(&a, cli.debug),
        parse::Command::Demo(a) => handlers::demo(&a, cli.debug),
        parse::Command::Markers => {
            handlers::markers();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
