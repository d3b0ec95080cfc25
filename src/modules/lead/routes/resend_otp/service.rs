use super::types::{request, response};
use crate::{modules::otp, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let record = otp::service::reissue(ctx, &payload.phone_number)
        .await
        .map_err(|err| match err {
            otp::service::IssueError::TooManyRequests
            | otp::service::IssueError::CooldownActive { .. } => response::Error::TooManyRequests,
            otp::service::IssueError::DeliveryFailed(message) => {
                response::Error::FailedToSendOtp(message)
            }
            otp::service::IssueError::UnexpectedError => response::Error::UnexpectedError,
        })?;

    Ok(response::Success::OtpResent(response::Resent {
        phone_number: record.phone_number,
        otp_id: record.id,
        expires_at: record.expires_at,
    }))
}
