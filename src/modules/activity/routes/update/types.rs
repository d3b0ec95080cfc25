pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub activity_type: Option<String>,
        pub message: Option<String>,
        pub status: Option<String>,
    }
}

pub mod response {
    use crate::modules::activity::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ActivityUpdated(Box<repository::Activity>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ActivityUpdated(activity) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Activity enquiry updated successfully",
                        "activity": activity,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidStatus,
        InvalidActivityType,
        ActivityNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidStatus => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid status value" })),
                )
                    .into_response(),
                Self::InvalidActivityType => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid activity type" })),
                )
                    .into_response(),
                Self::ActivityNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Activity enquiry not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update activity enquiry" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
