use super::{service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

pub async fn handler(
    _: AdminAuth,
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    Json(payload): Json<request::Payload>,
) -> impl axum::response::IntoResponse {
    service::service(ctx, id, payload).await
}
