use anyhow::Result;
use clap::Parser;
use threadops::{cli::Cli, filter::FilterConfig, runner};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; warnings always reach stderr, --debug adds everything
fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = FilterConfig::new(args.identifiers)
        .with_match_mode(args.match_mode)
        .with_malformed_policy(args.on_malformed);

    let summary = runner::run(&args.input, &config)?;

    if args.summary {
        eprintln!("{}", summary);
    }

    Ok(())
}
