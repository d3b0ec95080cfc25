pub mod response {
    use crate::modules::contact::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Contact(Box<repository::Contact>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Contact(contact) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "contact": contact })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ContactNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ContactNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Contact not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch contact" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
