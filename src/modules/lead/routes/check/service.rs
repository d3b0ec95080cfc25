use super::types::{request, response};
use crate::{
    modules::lead::repository,
    types::Context,
    utils::phone,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let clean_phone = phone::normalize(&payload.phone_number);

    let lead = repository::find_active_by_phone(&ctx.db_conn.pool, clean_phone)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    let lead = match lead {
        Some(lead) => lead,
        None => return Ok(response::Success::NotFound),
    };

    let children = repository::find_child_summaries_by_lead_id(&ctx.db_conn.pool, lead.id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::Found(Box::new(response::ExistingLead {
        lead,
        children,
    })))
}
