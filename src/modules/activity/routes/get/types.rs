pub mod response {
    use crate::modules::activity::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Activity(Box<repository::Activity>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Activity(activity) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "activity": activity })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ActivityNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ActivityNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Activity enquiry not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch activity enquiry" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
