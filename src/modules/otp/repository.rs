use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

/// One row per issuance attempt. Rows are never deleted; stale issuances are
/// simply left behind as an audit trail and stop matching the "active"
/// predicates once verified or past expiry.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct OtpRecord {
    pub id: String,
    pub phone_number: String,
    pub otp: String,
    pub purpose: String,
    pub message_id: Option<String>,
    pub status: String,
    pub expires_at: NaiveDateTime,
    pub verified: bool,
    pub verified_at: Option<NaiveDateTime>,
    pub attempts: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateOtpPayload {
    pub phone_number: String,
    pub otp: String,
    pub purpose: String,
    pub message_id: Option<String>,
    pub expires_at: NaiveDateTime,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateOtpPayload,
) -> Result<OtpRecord, Error> {
    sqlx::query_as::<_, OtpRecord>(
        "
        INSERT INTO whatsapp_otps (id, phone_number, otp, purpose, message_id, status, expires_at)
        VALUES ($1, $2, $3, $4, $5, 'sent', $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.phone_number)
    .bind(payload.otp)
    .bind(payload.purpose)
    .bind(payload.message_id)
    .bind(payload.expires_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating OTP record: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_latest_active_by_phone<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
    now: NaiveDateTime,
) -> Result<Option<OtpRecord>, Error> {
    sqlx::query_as::<_, OtpRecord>(
        "
        SELECT * FROM whatsapp_otps
        WHERE phone_number = $1 AND verified = FALSE AND expires_at > $2
        ORDER BY created_at DESC
        LIMIT 1
        ",
    )
    .bind(phone_number)
    .bind(now)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching latest active OTP: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count_created_since<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
    since: NaiveDateTime,
) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM whatsapp_otps WHERE phone_number = $1 AND created_at >= $2",
    )
    .bind(phone_number)
    .bind(since)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while counting OTP issuances: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_for_verification<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
    code: String,
    now: NaiveDateTime,
) -> Result<Option<OtpRecord>, Error> {
    sqlx::query_as::<_, OtpRecord>(
        "
        SELECT * FROM whatsapp_otps
        WHERE phone_number = $1 AND otp = $2 AND verified = FALSE AND expires_at > $3
        ORDER BY created_at DESC
        LIMIT 1
        ",
    )
    .bind(phone_number)
    .bind(code)
    .bind(now)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while looking up OTP for verification: {}", err);
        Error::UnexpectedError
    })
}

pub async fn mark_verified<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    now: NaiveDateTime,
) -> Result<(), Error> {
    sqlx::query(
        "UPDATE whatsapp_otps SET verified = TRUE, verified_at = $2, status = 'verified' WHERE id = $1",
    )
    .bind(id.clone())
    .bind(now)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to mark OTP {} as verified: {}", id, err);
        Error::UnexpectedError
    })
}

/// Increments the attempt counter on every unverified, unexpired OTP for the
/// phone. A failed code entry therefore counts against whichever issuances
/// are still live rather than one specific row.
pub async fn bump_active_attempts<'e, E: PgExecutor<'e>>(
    e: E,
    phone_number: String,
    now: NaiveDateTime,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE whatsapp_otps SET attempts = attempts + 1
        WHERE phone_number = $1 AND verified = FALSE AND expires_at > $2
        ",
    )
    .bind(phone_number)
    .bind(now)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to bump OTP attempts: {}", err);
        Error::UnexpectedError
    })
}
