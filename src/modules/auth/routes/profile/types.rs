pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 3, code = "USERNAME_TOO_SHORT", message = "Username must be at least 3 characters long"))]
        pub username: String,
    }
}

pub mod response {
    use crate::modules::auth::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub struct Updated {
        pub user: repository::User,
        pub token: String,
    }

    pub enum Success {
        UsernameUpdated(Box<Updated>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UsernameUpdated(updated) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Username updated successfully",
                        "user": updated.user,
                        "token": updated.token,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        UsernameTaken,
        UserNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::UsernameTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Username already taken" })),
                )
                    .into_response(),
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update username" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
