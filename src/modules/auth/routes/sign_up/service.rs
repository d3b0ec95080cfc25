use super::types::{request, response};
use crate::{modules::auth::repository, types::Context};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    if repository::find_by_email(&ctx.db_conn.pool, payload.email.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyRegistered);
    }

    let salt = SaltString::generate(&mut OsRng);
    let hashed_password = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            response::Error::UnexpectedError
        })?
        .to_string();

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateUserPayload {
            username: payload.username,
            email: payload.email,
            password: hashed_password,
            role: payload.role,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::UserRegistered)
}
