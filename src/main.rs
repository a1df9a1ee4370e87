use std::process::exit;

use contact_book::prelude::{Config, run_app};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout belongs to the prompts, so diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!(path = ?config.contacts_path, "starting contact book");

    if let Err(e) = run_app(&config) {
        error!(error = %e, "contact book stopped");
        eprintln!("Error: {e}");
        exit(1);
    }
}
