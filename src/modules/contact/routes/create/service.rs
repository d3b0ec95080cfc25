use super::types::{request, response};
use crate::{modules::contact::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateContactPayload {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            subject: payload.subject,
            message: payload.message,
        },
    )
    .await
    .map(|contact| response::Success::ContactCreated(Box::new(contact)))
    .map_err(|_| response::Error::UnexpectedError)
}
