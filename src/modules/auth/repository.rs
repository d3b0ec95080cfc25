use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct LoginOtp {
    pub id: String,
    pub user_id: String,
    pub otp: String,
    pub used: bool,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User, Error> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, username, email, password, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.username)
    .bind(payload.email)
    .bind(payload.password)
    .bind(payload.role)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user by email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user by id: {}", err);
            Error::UnexpectedError
        })
}

pub async fn username_taken<'e, E: PgExecutor<'e>>(
    e: E,
    username: String,
    excluding_user_id: String,
) -> Result<bool, Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND id <> $2)",
    )
    .bind(username)
    .bind(excluding_user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while checking username availability: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_username<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    username: String,
) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET username = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(username)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating username: {}", err);
        Error::UnexpectedError
    })
}

pub async fn create_login_otp<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    otp: String,
    expires_at: NaiveDateTime,
) -> Result<LoginOtp, Error> {
    sqlx::query_as::<_, LoginOtp>(
        "
        INSERT INTO login_otps (id, user_id, otp, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(user_id)
    .bind(otp)
    .bind(expires_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating login OTP: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_valid_login_otp<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    otp: String,
    now: NaiveDateTime,
) -> Result<Option<LoginOtp>, Error> {
    sqlx::query_as::<_, LoginOtp>(
        "
        SELECT * FROM login_otps
        WHERE user_id = $1 AND otp = $2 AND used = FALSE AND expires_at > $3
        ORDER BY created_at DESC
        LIMIT 1
        ",
    )
    .bind(user_id)
    .bind(otp)
    .bind(now)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching login OTP: {}", err);
        Error::UnexpectedError
    })
}

pub async fn mark_login_otp_used<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("UPDATE login_otps SET used = TRUE WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to mark login OTP as used: {}", err);
            Error::UnexpectedError
        })
}
