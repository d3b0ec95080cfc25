pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub phone: String,
        pub otp: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OtpVerified,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OtpVerified => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "OTP verified successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingRequiredFields,
        InvalidOtp,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingRequiredFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Phone and OTP are required" })),
                )
                    .into_response(),
                Self::InvalidOtp => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid OTP" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
