pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(length(min = 1, code = "PHONE_NUMBER_REQUIRED", message = "Phone number is required"))]
        pub phone_number: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use chrono::NaiveDateTime;
    use serde_json::json;

    pub struct Resent {
        pub phone_number: String,
        pub otp_id: String,
        pub expires_at: NaiveDateTime,
    }

    pub enum Success {
        OtpResent(Resent),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OtpResent(resent) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "OTP resent successfully",
                        "phoneNumber": resent.phone_number,
                        "otpId": resent.otp_id,
                        "expiresAt": resent.expires_at,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        TooManyRequests,
        FailedToSendOtp(String),
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::TooManyRequests => (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "error": "Too many OTP requests. Please try again later." })),
                )
                    .into_response(),
                Self::FailedToSendOtp(message) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to store OTP" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
