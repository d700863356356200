use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tracing::warn;

use super::http::HttpRequest;
use super::protocols::Controller;

pub const SIGNUP_PATH: &str = "/api/signup";

/// Router builder exposing a sign-up controller over HTTP.
pub fn signup_router<C>(controller: Arc<C>) -> Router
where
    C: Controller + 'static,
{
    Router::new()
        .route(SIGNUP_PATH, post(signup_handler::<C>))
        .with_state(controller)
}

pub(crate) async fn signup_handler<C>(
    State(controller): State<Arc<C>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Response
where
    C: Controller + 'static,
{
    match payload {
        Ok(Json(body)) => controller
            .handle(HttpRequest::new(body))
            .await
            .into_response(),
        Err(rejection) => {
            warn!(%rejection, "sign-up payload is not a JSON object");
            let payload = json!({
                "error": rejection.body_text(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
