pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(length(min = 1, code = "NAME_REQUIRED", message = "Name is required"))]
        pub name: String,
        #[validate(email(code = "INVALID_EMAIL", message = "Invalid email format"))]
        pub email: String,
        #[validate(length(min = 10, code = "INVALID_PHONE", message = "Invalid phone number format"))]
        pub phone: String,
        #[validate(length(min = 1, code = "ACTIVITY_TYPE_REQUIRED", message = "Activity type is required"))]
        pub activity_type: String,
        #[serde(default)]
        pub message: String,
    }
}

pub mod response {
    use crate::modules::activity::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        EnquirySubmitted(Box<repository::Activity>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EnquirySubmitted(activity) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Enquiry submitted successfully",
                        "activity": activity,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        InvalidActivityType,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::InvalidActivityType => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid activity type" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create enquiry" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
