//! Verification-token codec for the lead intake flow.
//!
//! The token is base64 over JSON: reversible, unsigned, and deliberately NOT
//! a cryptographic proof. Anyone can decode or fabricate one. This is
//! acceptable only because the token is redeemed against a father phone
//! number the server re-checks on its own, and because the window is short.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerificationClaims {
    pub phone: String,
    pub verified_at: DateTime<Utc>,
    pub otp_id: String,
    /// Epoch milliseconds; always `verified_at` + 30 minutes when minted here.
    pub exp: i64,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidToken,
    Expired,
}

pub fn mint(phone: &str, otp_id: &str, now: DateTime<Utc>) -> String {
    encode(&VerificationClaims {
        phone: phone.to_string(),
        verified_at: now,
        otp_id: otp_id.to_string(),
        exp: (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp_millis(),
    })
}

pub fn encode(claims: &VerificationClaims) -> String {
    BASE64_STANDARD.encode(serde_json::to_vec(claims).expect("claims serialize"))
}

pub fn decode(token: &str, now: DateTime<Utc>) -> Result<VerificationClaims, Error> {
    let bytes = BASE64_STANDARD
        .decode(token)
        .map_err(|_| Error::InvalidToken)?;
    let claims: VerificationClaims =
        serde_json::from_slice(&bytes).map_err(|_| Error::InvalidToken)?;

    if now.timestamp_millis() > claims.exp {
        return Err(Error::Expired);
    }

    // Redundant with the exp check for tokens minted here, but kept: a token
    // whose verification moment is older than the TTL is rejected no matter
    // what its exp claims.
    if now - claims.verified_at > Duration::minutes(TOKEN_TTL_MINUTES) {
        return Err(Error::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_inside_window() {
        let now = Utc::now();
        let token = mint("9876543210", "01J0OTPID00000000000000000", now);
        let claims = decode(&token, now + Duration::minutes(5)).unwrap();

        assert_eq!(claims.phone, "9876543210");
        assert_eq!(claims.otp_id, "01J0OTPID00000000000000000");
        assert_eq!(claims.verified_at, now);
        assert_eq!(claims.exp, (now + Duration::minutes(30)).timestamp_millis());
    }

    #[test]
    fn encode_decode_reproduces_claims_exactly() {
        let now = Utc::now();
        let claims = VerificationClaims {
            phone: "9876543210".to_string(),
            verified_at: now,
            otp_id: "abc".to_string(),
            exp: (now + Duration::minutes(30)).timestamp_millis(),
        };
        assert_eq!(decode(&encode(&claims), now).unwrap(), claims);
    }

    #[test]
    fn rejects_after_exp() {
        let now = Utc::now();
        let token = mint("9876543210", "otp", now);
        assert_eq!(
            decode(&token, now + Duration::minutes(31)),
            Err(Error::Expired)
        );
    }

    #[test]
    fn rejects_stale_verification_even_with_forged_exp() {
        let now = Utc::now();
        let forged = encode(&VerificationClaims {
            phone: "9876543210".to_string(),
            verified_at: now - Duration::minutes(45),
            otp_id: "otp".to_string(),
            exp: (now + Duration::hours(2)).timestamp_millis(),
        });
        assert_eq!(decode(&forged, now), Err(Error::Expired));
    }

    #[test]
    fn rejects_malformed_input() {
        let now = Utc::now();
        assert_eq!(decode("not base64!!", now), Err(Error::InvalidToken));
        let garbage = BASE64_STANDARD.encode(b"{\"phone\":1}");
        assert_eq!(decode(&garbage, now), Err(Error::InvalidToken));
    }
}
