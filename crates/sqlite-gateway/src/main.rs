mod adapters;
mod cli;
mod core;
mod error;
mod logging;
mod seed;

use std::time::Duration;

use clap::Parser;

use crate::{
    adapters::http::AppState,
    cli::Args,
    core::connection::StoreConfig,
    error::AppResult,
};

#[actix_web::main]
async fn main() -> AppResult<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let store = StoreConfig::new(&args.db_path, Duration::from_millis(args.busy_timeout_ms))?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        db=%store.db_path.display(),
        "starting sqlite-gateway"
    );
    if !args.no_seed {
        seed::init_demo_data(&store)?;
    }

    adapters::http::run(&args, AppState::new(store)).await
}
