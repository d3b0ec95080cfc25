use super::{service, types::request};
use crate::{
    modules::auth::middleware::AdminAuth,
    types::Context,
    utils::pagination::Pagination,
};
use axum::extract::{Query, State};
use std::sync::Arc;

pub async fn handler(
    _: AdminAuth,
    State(ctx): State<Arc<Context>>,
    pagination: Pagination,
    Query(filters): Query<request::Filters>,
) -> impl axum::response::IntoResponse {
    service::service(ctx, pagination, filters).await
}
