use super::types::{request, response};
use crate::{
    modules::auth::{middleware::AdminAuth, repository},
    types::Context,
    utils::session,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth: AdminAuth,
    payload: request::Payload,
) -> response::Response {
    let payload = request::Payload {
        username: payload.username.trim().to_string(),
    };
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let user_id = auth.session.user_id;

    if repository::username_taken(&ctx.db_conn.pool, payload.username.clone(), user_id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::UsernameTaken);
    }

    let user = repository::update_username(&ctx.db_conn.pool, user_id, payload.username)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::UserNotFound)?;

    // The client swaps its stored token for this one so the new identity
    // shows up without a fresh login.
    let token = session::sign(
        &session::Session {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            issued_at: Utc::now().timestamp(),
        },
        &ctx.auth.session_secret,
    );

    Ok(response::Success::UsernameUpdated(Box::new(
        response::Updated { user, token },
    )))
}
