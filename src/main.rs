//! Entry point: parse CLI, set up logging and run the snapshot.

use clap::Parser;
use fpl_draft_cache::{
    cli::DraftCache,
    commands::snapshot::{exit_code, handle_snapshot, SnapshotParams},
};
use tracing::Level;

#[tokio::main]
async fn main() {
    let app = DraftCache::parse();
    setup_logging(app.verbose);

    let result = handle_snapshot(SnapshotParams::from(app)).await;
    if let Err(e) = &result {
        println!("{}", e);
    }

    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
