use super::types::{request, response};
use crate::{
    modules::career::repository,
    types::Context,
    utils::pagination::Pagination,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    pagination: Pagination,
    filters: request::Filters,
) -> response::Response {
    repository::find_many(&ctx.db_conn.pool, pagination, filters)
        .await
        .map(response::Success::Applications)
        .map_err(|_| response::Error::UnexpectedError)
}
