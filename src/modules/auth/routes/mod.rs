mod login;
mod profile;
mod sign_up;
mod verify_otp;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/signup", sign_up::get_router())
        .nest("/login", login::get_router())
        .nest("/verify-otp", verify_otp::get_router())
        .nest("/profile", profile::get_router())
}
