use crate::types::Context;
use crate::utils::session::{self, Session};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http, http::request::Parts, response::Response};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

fn get_token_from_header(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

/// Guard for the admin-facing endpoints. The session token is self-contained
/// (signed claims, 24h window), so no store lookup happens here.
#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub session: Session,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|_| unauthorized("Unauthorized - No token provided"))?;

        let headers = parts
            .extract::<HeaderMap>()
            .await
            .map_err(|_| unauthorized("Unauthorized - No token provided"))?;

        let token = headers
            .get(http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(get_token_from_header)
            .ok_or_else(|| unauthorized("Unauthorized - No token provided"))?;

        let session = session::verify(token, &ctx.auth.session_secret, Utc::now())
            .map_err(|err| match err {
                session::Error::Expired => unauthorized("Unauthorized - Token expired"),
                session::Error::InvalidToken => unauthorized("Unauthorized - Invalid token"),
            })?;

        Ok(Self { session })
    }
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}
