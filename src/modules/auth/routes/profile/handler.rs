use super::{service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn handler(
    auth: AdminAuth,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<request::Payload>,
) -> impl axum::response::IntoResponse {
    service::service(ctx, auth, payload).await
}
