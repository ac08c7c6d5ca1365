use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Extension,
};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::problem::{Extra, ProblemResponse};
use crate::infrastructure::config::Config;
use crate::infrastructure::http::RequestId;

/// Fallback for unmatched routes - 404 as problem details
pub async fn not_found(
    State(config): State<Arc<Config>>,
    request_id: Option<Extension<RequestId>>,
    method: Method,
    uri: Uri,
) -> Response {
    let mut extra = Extra::new();
    if let Some(Extension(RequestId(id))) = request_id {
        extra.insert("request_id".to_string(), Value::String(id));
    }

    let detail = format!("No route for {} {}", method, uri.path());
    tracing::debug!(method = %method, path = %uri.path(), "No matching route");

    let problem = ProblemResponse::new(
        StatusCode::NOT_FOUND.as_u16(),
        config.problem_type("not-found"),
        "Not Found",
        uri.path(),
        Some(extra),
        Some(detail.as_str()),
    );

    let mut response = StatusCode::NOT_FOUND.into_response();
    problem.write_to_http(&mut response);
    response
}
