use super::types::{request, response};
use crate::{modules::activity::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    if !repository::ACTIVITY_TYPES.contains(&payload.activity_type.as_str()) {
        return Err(response::Error::InvalidActivityType);
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateActivityPayload {
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            activity_type: payload.activity_type,
            message: payload.message.trim().to_string(),
        },
    )
    .await
    .map(|activity| response::Success::EnquirySubmitted(Box::new(activity)))
    .map_err(|_| response::Error::UnexpectedError)
}
