pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(length(min = 1, code = "USER_ID_REQUIRED", message = "User ID is required"))]
        pub user_id: String,
        #[validate(length(min = 1, code = "OTP_REQUIRED", message = "OTP is required"))]
        pub otp: String,
    }
}

pub mod response {
    use crate::modules::auth::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub struct LoggedIn {
        pub token: String,
        pub user: repository::User,
    }

    pub enum Success {
        LoginSuccessful(Box<LoggedIn>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoginSuccessful(logged_in) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Login successful",
                        "token": logged_in.token,
                        "user": logged_in.user,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        InvalidOrExpiredOtp,
        UserNotFound,
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
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
