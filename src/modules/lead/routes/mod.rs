mod check;
mod create;
mod get;
mod list;
mod resend_otp;
mod send_otp;
mod update;
mod verify_otp;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/send-otp", send_otp::get_router())
        .nest("/resend-otp", resend_otp::get_router())
        .nest("/verify-otp", verify_otp::get_router())
        .nest("/check", check::get_router())
        .nest("/create", create::get_router())
        .merge(list::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
}
