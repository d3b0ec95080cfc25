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
    use crate::modules::lead::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct ExistingLead {
        #[serde(flatten)]
        pub lead: repository::Lead,
        pub children: Vec<repository::ChildSummary>,
    }

    pub enum Success {
        Found(Box<ExistingLead>),
        NotFound,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Found(existing) => (
                    StatusCode::OK,
                    Json(json!({ "exists": true, "lead": existing })),
                )
                    .into_response(),
                Self::NotFound => (
                    StatusCode::OK,
                    Json(json!({ "exists": false, "lead": null })),
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
                    Json(json!({ "error": "Failed to check lead" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
