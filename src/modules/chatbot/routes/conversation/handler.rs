use super::service;
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn handler(
    _: AdminAuth,
    State(ctx): State<Arc<Context>>,
    Path(phone): Path<String>,
) -> impl axum::response::IntoResponse {
    service::service(ctx, phone).await
}
