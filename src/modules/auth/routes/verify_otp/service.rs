use super::types::{request, response};
use crate::{
    modules::auth::repository,
    types::Context,
    utils::session,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let now = Utc::now();

    let otp_record = repository::find_valid_login_otp(
        &ctx.db_conn.pool,
        payload.user_id.clone(),
        payload.otp,
        now.naive_utc(),
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    .ok_or(response::Error::InvalidOrExpiredOtp)?;

    // Single use.
    repository::mark_login_otp_used(&ctx.db_conn.pool, otp_record.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    let user = repository::find_by_id(&ctx.db_conn.pool, payload.user_id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::UserNotFound)?;

    let token = session::sign(
        &session::Session {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            issued_at: now.timestamp(),
        },
        &ctx.auth.session_secret,
    );

    Ok(response::Success::LoginSuccessful(Box::new(
        response::LoggedIn { token, user },
    )))
}
