use crate::types::Context;
use axum::Router;
use std::sync::Arc;

use super::{activity, auth, career, chatbot, contact, lead};

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/auth", auth::routes::get_router())
        .nest("/leads", lead::routes::get_router())
        .nest("/contacts", contact::routes::get_router())
        .nest("/careers", career::routes::get_router())
        .nest("/after-school-activity", activity::routes::get_router())
        .nest("/chatbot", chatbot::routes::get_router())
}
