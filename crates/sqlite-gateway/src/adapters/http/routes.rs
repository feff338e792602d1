//! HTTP route registration.

use actix_web::web;

use super::handlers;

/// - GET  /          static query page
/// - POST /execute   run one statement
/// - GET  /schema    live table/column description
/// - GET  /examples  canned sample statements
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::index)
        .service(handlers::execute_sql)
        .service(handlers::get_schema)
        .service(handlers::get_examples);
}
