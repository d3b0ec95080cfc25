pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub name: String,
        pub phone: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AlreadyRegistered,
        OtpSent,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AlreadyRegistered => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "verified": true,
                        "message": "User already registered",
                    })),
                )
                    .into_response(),
                Self::OtpSent => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "verified": false,
                        "message": "OTP sent successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingRequiredFields,
        InvalidPhoneNumber,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingRequiredFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Name and phone are required" })),
                )
                    .into_response(),
                Self::InvalidPhoneNumber => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Please provide a valid 10-digit phone number" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to register user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
