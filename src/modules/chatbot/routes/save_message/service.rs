use super::types::{request, response};
use crate::{modules::chatbot::repository, types::Context, utils::phone};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if payload.phone.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(response::Error::MissingRequiredFields);
    }

    repository::create_message(
        &ctx.db_conn.pool,
        repository::CreateMessagePayload {
            phone: phone::normalize(&payload.phone),
            message: payload.message,
            response: payload.response.unwrap_or_default(),
        },
    )
    .await
    .map(response::Success::MessageSaved)
    .map_err(|_| response::Error::UnexpectedError)
}
