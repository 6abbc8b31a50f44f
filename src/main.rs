use std::process::exit;

use address_book::prelude::run_app;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so they never mix with the interactive session
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
