pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1, code = "USERNAME_REQUIRED", message = "Username is required"))]
        pub username: String,
        #[validate(email(code = "INVALID_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 8, code = "PASSWORD_TOO_SHORT", message = "Password must be at least 8 characters"))]
        pub password: String,
        #[validate(length(min = 1, code = "ROLE_REQUIRED", message = "Role is required"))]
        pub role: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        UserRegistered,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserRegistered => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "User registered successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        EmailAlreadyRegistered,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::EmailAlreadyRegistered => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already registered" })),
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
