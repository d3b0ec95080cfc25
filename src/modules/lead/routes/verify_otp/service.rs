use super::types::{request, response};
use crate::{modules::otp, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let (record, token) = otp::service::verify(ctx, &payload.phone_number, &payload.otp)
        .await
        .map_err(|err| match err {
            otp::service::VerifyError::InvalidOrExpired => response::Error::InvalidOrExpiredOtp,
            otp::service::VerifyError::TooManyAttempts => response::Error::TooManyAttempts,
            otp::service::VerifyError::UnexpectedError => response::Error::UnexpectedError,
        })?;

    Ok(response::Success::OtpVerified(response::Verified {
        phone_number: record.phone_number,
        token,
        verified_at: record.verified_at,
    }))
}
