use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sqlite-gateway", version)]
pub struct Args {
    /// SQLite database file. Created on first open if missing.
    #[arg(long, env = "SQLITE_GATEWAY_DB_PATH", default_value = "database/consultas.db")]
    pub db_path: PathBuf,

    /// Address the HTTP server binds to.
    #[arg(long, env = "SQLITE_GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SQLITE_GATEWAY_PORT", default_value_t = 5000)]
    pub port: u16,

    /// HTTP worker threads; 0 lets actix pick one per core.
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// How long a connection waits on a locked database before failing.
    #[arg(long, default_value_t = 2_000)]
    pub busy_timeout_ms: u64,

    /// Skip creating and filling the demo tables on startup.
    #[arg(long)]
    pub no_seed: bool,

    /// Logging level (stderr). Also supports RUST_LOG.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
