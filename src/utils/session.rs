//! Admin session tokens: an HMAC-SHA256 signed, base64 JSON payload with a
//! fixed 24-hour validity window. Expiry is a policy function over the
//! session itself (`is_expired`) so route guards can be given an explicit
//! `now` instead of reading ambient clock state.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

pub const SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub issued_at: i64,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidToken,
    Expired,
}

pub fn is_expired(session: &Session, now: DateTime<Utc>) -> bool {
    now.timestamp() - session.issued_at > SESSION_TTL_SECONDS
}

fn signature(payload: &str, secret: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    base16ct::lower::encode_string(&mac.finalize().into_bytes())
}

pub fn sign(session: &Session, secret: &str) -> String {
    let payload =
        BASE64_STANDARD.encode(serde_json::to_vec(session).expect("session serializes"));
    let sig = signature(&payload, secret);
    format!("{}.{}", payload, sig)
}

pub fn verify(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Session, Error> {
    let (payload, sig) = token.split_once('.').ok_or(Error::InvalidToken)?;

    if signature(payload, secret) != sig {
        return Err(Error::InvalidToken);
    }

    let bytes = BASE64_STANDARD
        .decode(payload)
        .map_err(|_| Error::InvalidToken)?;
    let session: Session = serde_json::from_slice(&bytes).map_err(|_| Error::InvalidToken)?;

    if is_expired(&session, now) {
        return Err(Error::Expired);
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(issued_at: i64) -> Session {
        Session {
            user_id: "01J0QDATA0000000000000USER".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
            issued_at,
        }
    }

    #[test]
    fn round_trip() {
        let now = Utc::now();
        let original = session(now.timestamp());
        let token = sign(&original, "secret");
        assert_eq!(verify(&token, "secret", now), Ok(original));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let now = Utc::now();
        let token = sign(&session(now.timestamp()), "secret");
        let (payload, sig) = token.split_once('.').unwrap();
        let tampered = format!("{}A.{}", payload, sig);
        assert_eq!(verify(&tampered, "secret", now), Err(Error::InvalidToken));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let now = Utc::now();
        let token = sign(&session(now.timestamp()), "secret");
        assert_eq!(verify(&token, "other", now), Err(Error::InvalidToken));
    }

    #[test]
    fn expires_after_24_hours() {
        let issued = Utc::now();
        let token = sign(&session(issued.timestamp()), "secret");

        let just_inside = issued + Duration::hours(24);
        assert!(verify(&token, "secret", just_inside).is_ok());

        let just_outside = issued + Duration::hours(24) + Duration::seconds(1);
        assert_eq!(verify(&token, "secret", just_outside), Err(Error::Expired));
    }
}
