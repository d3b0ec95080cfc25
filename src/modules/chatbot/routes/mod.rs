mod conversation;
mod register_user;
mod save_message;
mod users;
mod verify_otp;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/register-user", register_user::get_router())
        .nest("/verify-otp", verify_otp::get_router())
        .nest("/save-message", save_message::get_router())
        .nest("/get-users", users::get_router())
        .merge(conversation::get_router())
}
