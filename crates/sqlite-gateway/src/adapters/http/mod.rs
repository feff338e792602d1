mod catalog;
mod handlers;
pub(crate) mod routes;

use actix_web::{middleware, web, App, HttpServer};

use crate::{
    cli::Args,
    core::{connection::StoreConfig, query::QueryExecutor, schema::SchemaInspector},
    error::AppResult,
};

/// Components shared by every worker. Both are plain configuration; each
/// request opens its own connection.
#[derive(Debug, Clone)]
pub struct AppState {
    pub executor: QueryExecutor,
    pub inspector: SchemaInspector,
}

impl AppState {
    pub fn new(store: StoreConfig) -> Self {
        Self {
            executor: QueryExecutor::new(store.clone()),
            inspector: SchemaInspector::new(store),
        }
    }
}

pub async fn run(args: &Args, state: AppState) -> AppResult<()> {
    let state = web::Data::new(state);
    let bind_addr = (args.host.clone(), args.port);
    tracing::info!(host=%args.host, port=args.port, "starting HTTP server");
    tracing::info!("endpoints: GET /, POST /execute, GET /schema, GET /examples");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(handlers::json_config())
            .configure(routes::configure)
    });
    if args.workers > 0 {
        server = server.workers(args.workers);
    }
    server.bind(bind_addr)?.run().await?;

    tracing::info!("server shutdown complete");
    Ok(())
}
