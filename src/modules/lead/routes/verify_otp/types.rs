pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(length(min = 1, code = "PHONE_NUMBER_REQUIRED", message = "Phone number is required"))]
        pub phone_number: String,
        #[validate(length(min = 1, code = "OTP_REQUIRED", message = "OTP is required"))]
        pub otp: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use chrono::NaiveDateTime;
    use serde_json::json;

    pub struct Verified {
        pub phone_number: String,
        pub token: String,
        pub verified_at: Option<NaiveDateTime>,
    }

    pub enum Success {
        OtpVerified(Verified),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OtpVerified(verified) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "OTP verified successfully",
                        "phoneNumber": verified.phone_number,
                        "token": verified.token,
                        "verifiedAt": verified.verified_at,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        InvalidOrExpiredOtp,
        TooManyAttempts,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::InvalidOrExpiredOtp => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid or expired OTP" })),
                )
                    .into_response(),
                Self::TooManyAttempts => (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "error": "Too many failed attempts. Please request a new OTP." })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to verify OTP" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
