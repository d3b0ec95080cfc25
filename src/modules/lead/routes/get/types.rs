pub mod response {
    use crate::modules::lead::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct LeadDetail {
        #[serde(flatten)]
        pub lead: repository::Lead,
        pub children: Vec<repository::Child>,
        pub lead_status_history: Vec<repository::StatusHistoryEntry>,
    }

    pub enum Success {
        Lead(Box<LeadDetail>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Lead(detail) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "lead": detail })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        LeadNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LeadNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Lead not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch lead details" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
