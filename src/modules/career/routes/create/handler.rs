use super::{service, types::request};
use crate::types::Context;
use axum::extract::State;
use axum_typed_multipart::TypedMultipart;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    TypedMultipart(payload): TypedMultipart<request::Payload>,
) -> impl axum::response::IntoResponse {
    service::service(ctx, payload).await
}
