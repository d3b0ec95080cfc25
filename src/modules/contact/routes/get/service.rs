use super::types::response;
use crate::{modules::contact::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .map(|contact| response::Success::Contact(Box::new(contact)))
        .ok_or(response::Error::ContactNotFound)
}
