pub mod database;
pub mod list_query;
pub mod mailer;
pub mod pagination;
pub mod phone;
pub mod session;
pub mod storage;
pub mod validation;
pub mod whatsapp;
