use super::types::{request, response};
use crate::{modules::otp, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let record = otp::service::issue(ctx, &payload.phone_number)
        .await
        .map_err(|err| match err {
            otp::service::IssueError::CooldownActive { .. } => response::Error::CooldownActive,
            otp::service::IssueError::TooManyRequests => response::Error::TooManyRequests,
            otp::service::IssueError::DeliveryFailed(message) => {
                response::Error::FailedToSendOtp(message)
            }
            otp::service::IssueError::UnexpectedError => response::Error::UnexpectedError,
        })?;

    Ok(response::Success::OtpSent(response::Sent {
        phone_number: record.phone_number,
        otp_id: record.id,
        expires_at: record.expires_at,
    }))
}
