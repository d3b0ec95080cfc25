pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1, code = "NAME_REQUIRED", message = "Name is required"))]
        pub name: String,
        #[validate(email(code = "INVALID_EMAIL", message = "Invalid email format"))]
        pub email: String,
        #[validate(length(min = 1, code = "PHONE_REQUIRED", message = "Phone is required"))]
        pub phone: String,
        #[serde(default)]
        pub subject: String,
        #[validate(length(min = 1, code = "MESSAGE_REQUIRED", message = "Message is required"))]
        pub message: String,
    }
}

pub mod response {
    use crate::modules::contact::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ContactCreated(Box<repository::Contact>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ContactCreated(contact) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Contact created successfully",
                        "contact": contact,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create contact" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
