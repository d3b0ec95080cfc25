use super::types::response;
use crate::{modules::lead::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    let lead = repository::find_by_id(&ctx.db_conn.pool, id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::LeadNotFound)?;

    let children = repository::find_children_by_lead_id(&ctx.db_conn.pool, id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    // Most recent status change first.
    let history = repository::find_history_by_lead_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::Lead(Box::new(response::LeadDetail {
        lead,
        children,
        lead_status_history: history,
    })))
}
