use super::{service, types::request};
use axum::Json;

pub async fn handler(Json(payload): Json<request::Payload>) -> impl axum::response::IntoResponse {
    service::service(payload)
}
