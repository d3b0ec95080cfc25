use super::{service, types::request};
use crate::types::Context;
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<request::Payload>,
) -> impl axum::response::IntoResponse {
    service::service(ctx, payload).await
}
