//! Lead-verification OTP lifecycle. This is the 10-minute-TTL instance of
//! the OTP flow; the 5-minute login OTP lives in the auth module with its
//! own table and policies and is deliberately not unified with this one.
//!
//! The two issuance entry points carry different admission policies on
//! purpose: `issue` (the send-otp endpoint) enforces the 30-second cooldown
//! against the latest live OTP, while `reissue` (resend-otp) enforces the
//! 5-per-hour cap over all issuances for the phone.

use crate::types::Context;
use crate::utils::{phone, whatsapp};
use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;
use std::sync::Arc;

use super::{repository, token};

pub const OTP_TTL_MINUTES: i64 = 10;
pub const RESEND_COOLDOWN_SECONDS: i64 = 30;
pub const HOURLY_ISSUE_CAP: i64 = 5;
pub const MAX_VERIFY_ATTEMPTS: i32 = 5;
pub const PURPOSE_LEAD_VERIFICATION: &str = "lead_verification";

pub enum IssueError {
    CooldownActive { wait_seconds: i64 },
    TooManyRequests,
    DeliveryFailed(String),
    UnexpectedError,
}

pub enum VerifyError {
    InvalidOrExpired,
    TooManyAttempts,
    UnexpectedError,
}

pub fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

pub fn cooldown_remaining(last_created_at: NaiveDateTime, now: NaiveDateTime) -> Option<i64> {
    let elapsed = (now - last_created_at).num_seconds();
    if elapsed < RESEND_COOLDOWN_SECONDS {
        Some(RESEND_COOLDOWN_SECONDS - elapsed)
    } else {
        None
    }
}

pub async fn issue(
    ctx: Arc<Context>,
    phone_number: &str,
) -> Result<repository::OtpRecord, IssueError> {
    let clean_phone = phone::normalize(phone_number);
    let now = Utc::now().naive_utc();

    let latest =
        repository::find_latest_active_by_phone(&ctx.db_conn.pool, clean_phone.clone(), now)
            .await
            .map_err(|_| IssueError::UnexpectedError)?;

    if let Some(latest) = latest {
        if let Some(wait_seconds) = cooldown_remaining(latest.created_at, now) {
            return Err(IssueError::CooldownActive { wait_seconds });
        }
    }

    dispatch(ctx, clean_phone, now).await
}

pub async fn reissue(
    ctx: Arc<Context>,
    phone_number: &str,
) -> Result<repository::OtpRecord, IssueError> {
    let clean_phone = phone::normalize(phone_number);
    let now = Utc::now().naive_utc();

    let issued_last_hour = repository::count_created_since(
        &ctx.db_conn.pool,
        clean_phone.clone(),
        now - Duration::hours(1),
    )
    .await
    .map_err(|_| IssueError::UnexpectedError)?;

    if issued_last_hour >= HOURLY_ISSUE_CAP {
        return Err(IssueError::TooManyRequests);
    }

    dispatch(ctx, clean_phone, now).await
}

/// Generates the code, hands it to the delivery collaborator, and persists
/// the record only once delivery reports success.
async fn dispatch(
    ctx: Arc<Context>,
    clean_phone: String,
    now: NaiveDateTime,
) -> Result<repository::OtpRecord, IssueError> {
    let code = generate_code();

    let report = whatsapp::send_otp(ctx.clone(), &clean_phone, &code)
        .await
        .map_err(|whatsapp::SendError(message)| IssueError::DeliveryFailed(message))?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateOtpPayload {
            phone_number: clean_phone,
            otp: code,
            purpose: PURPOSE_LEAD_VERIFICATION.to_string(),
            message_id: report.message_id,
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
        },
    )
    .await
    .map_err(|_| IssueError::UnexpectedError)
}

pub async fn verify(
    ctx: Arc<Context>,
    phone_number: &str,
    code: &str,
) -> Result<(repository::OtpRecord, String), VerifyError> {
    let clean_phone = phone::normalize(phone_number);
    let now = Utc::now().naive_utc();

    let record = repository::find_for_verification(
        &ctx.db_conn.pool,
        clean_phone.clone(),
        code.to_string(),
        now,
    )
    .await
    .map_err(|_| VerifyError::UnexpectedError)?;

    let mut record = match record {
        Some(record) => record,
        None => {
            // A miss charges the attempt counter of every still-live OTP
            // for the phone, not just the code that was checked, so the
            // lockout counts misses phone-wide.
            repository::bump_active_attempts(&ctx.db_conn.pool, clean_phone, now)
                .await
                .ok();
            return Err(VerifyError::InvalidOrExpired);
        }
    };

    if record.attempts >= MAX_VERIFY_ATTEMPTS {
        return Err(VerifyError::TooManyAttempts);
    }

    repository::mark_verified(&ctx.db_conn.pool, record.id.clone(), now)
        .await
        .map_err(|_| VerifyError::UnexpectedError)?;
    record.verified = true;
    record.verified_at = Some(now);

    let verification_token = token::mint(&record.phone_number, &record.id, Utc::now());

    Ok((record, verification_token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(seconds: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, seconds)
            .unwrap()
    }

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn cooldown_blocks_inside_thirty_seconds() {
        assert_eq!(cooldown_remaining(at(0), at(0)), Some(30));
        assert_eq!(cooldown_remaining(at(0), at(29)), Some(1));
    }

    #[test]
    fn cooldown_clears_at_thirty_seconds() {
        assert_eq!(cooldown_remaining(at(0), at(30)), None);
        assert_eq!(cooldown_remaining(at(0), at(31)), None);
    }
}
