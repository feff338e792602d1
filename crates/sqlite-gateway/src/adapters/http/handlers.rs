use actix_web::{error::InternalError, get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    core::types::{ResponseEnvelope, SchemaResponse, Statement},
    error::AppError,
};

use super::{catalog, AppState};

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub query: String,
}

/// Body errors still answer 200 with a failure envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let envelope = ResponseEnvelope::failure(format!("invalid request body: {err}"));
        InternalError::from_response(err, HttpResponse::Ok().json(envelope)).into()
    })
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[post("/execute")]
pub async fn execute_sql(req: web::Json<ExecuteRequest>, state: web::Data<AppState>) -> HttpResponse {
    let statement = match Statement::parse(&req.query) {
        Ok(s) => s,
        Err(e) => return HttpResponse::Ok().json(ResponseEnvelope::from(e)),
    };

    let executor = state.executor.clone();
    let envelope = tokio::task::spawn_blocking(move || executor.execute(&statement))
        .await
        .unwrap_or_else(|e| AppError::Internal(format!("execute task failed: {e}")).into());
    HttpResponse::Ok().json(envelope)
}

#[get("/schema")]
pub async fn get_schema(state: web::Data<AppState>) -> HttpResponse {
    let inspector = state.inspector.clone();
    let res = tokio::task::spawn_blocking(move || inspector.describe_schema())
        .await
        .unwrap_or_else(|e| Err(AppError::Internal(format!("schema task failed: {e}"))));
    HttpResponse::Ok().json(SchemaResponse::from(res))
}

#[get("/examples")]
pub async fn get_examples() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "examples": catalog::EXAMPLES }))
}
