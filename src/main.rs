use clap::Parser;
use snip::commands::handle_command;
use snip::Snip;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    // Logs go to stderr; stdout carries rendered snippets
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snip=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Snip::parse();

    if let Err(e) = handle_command(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
