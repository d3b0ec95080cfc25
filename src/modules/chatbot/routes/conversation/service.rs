use super::types::response;
use crate::{modules::chatbot::repository, types::Context, utils::phone};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, raw_phone: String) -> response::Response {
    let clean_phone = phone::normalize(&raw_phone);

    let user = repository::find_user_by_phone(&ctx.db_conn.pool, clean_phone.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::UserNotFound)?;

    let messages = repository::find_messages_by_phone(&ctx.db_conn.pool, clean_phone)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::Conversation {
        user: Box::new(user),
        messages,
    })
}
