use super::types::{request, response};
use crate::{modules::chatbot::repository, types::Context, utils::phone};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let name = payload.name.trim().to_owned();
    if name.is_empty() || payload.phone.trim().is_empty() {
        return Err(response::Error::MissingRequiredFields);
    }

    let clean_phone = phone::normalize(&payload.phone);
    if !phone::is_ten_digit(&clean_phone) {
        return Err(response::Error::InvalidPhoneNumber);
    }

    let existing = repository::find_user_by_phone(&ctx.db_conn.pool, clean_phone.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    // Repeat visitors skip the OTP step entirely.
    if existing.is_some() {
        return Ok(response::Success::AlreadyRegistered);
    }

    repository::create_user(
        &ctx.db_conn.pool,
        repository::CreateUserPayload {
            name,
            phone: clean_phone,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::OtpSent)
}
