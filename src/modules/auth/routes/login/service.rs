use super::types::{request, response};
use crate::{
    modules::{auth::repository, otp},
    types::Context,
    utils::mailer,
};
use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

/// The login OTP rides a shorter window than the lead-verification one.
pub const LOGIN_OTP_TTL_MINUTES: i64 = 5;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let user = repository::find_by_email(&ctx.db_conn.pool, payload.email)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::InvalidCredentials)?;

    let parsed_hash =
        PasswordHash::new(&user.password).map_err(|_| response::Error::InvalidCredentials)?;
    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| response::Error::InvalidCredentials)?;

    let code = otp::service::generate_code();
    let expires_at = Utc::now().naive_utc() + Duration::minutes(LOGIN_OTP_TTL_MINUTES);

    repository::create_login_otp(&ctx.db_conn.pool, user.id.clone(), code.clone(), expires_at)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    mailer::send_login_otp(ctx.clone(), &code)
        .await
        .map_err(|_| response::Error::FailedToSendOtp)?;

    Ok(response::Success::OtpSent { user_id: user.id })
}
