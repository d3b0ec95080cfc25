pub mod activity;
pub mod auth;
pub mod career;
pub mod chatbot;
pub mod contact;
pub mod lead;
pub mod otp;

mod router;
pub use router::get_router;
