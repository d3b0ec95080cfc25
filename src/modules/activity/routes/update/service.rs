use super::types::{request, response};
use crate::{modules::activity::repository, types::Context};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    id: String,
    payload: request::Payload,
) -> response::Response {
    if let Some(status) = payload.status.as_deref() {
        if !repository::STATUSES.contains(&status) {
            return Err(response::Error::InvalidStatus);
        }
    }

    if let Some(activity_type) = payload.activity_type.as_deref() {
        if !repository::ACTIVITY_TYPES.contains(&activity_type) {
            return Err(response::Error::InvalidActivityType);
        }
    }

    repository::update_by_id(
        &ctx.db_conn.pool,
        id,
        repository::UpdateActivityPayload {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            activity_type: payload.activity_type,
            message: payload.message,
            status: payload.status,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    .map(|activity| response::Success::ActivityUpdated(Box::new(activity)))
    .ok_or(response::Error::ActivityNotFound)
}
