pub mod request {
    pub use crate::modules::activity::repository::Filters;
}

pub mod response {
    use crate::modules::activity::repository;
    use crate::utils::pagination::Paginated;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Activities(Paginated<repository::Activity>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Activities(paginated) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "activities": paginated.items,
                        "pagination": paginated.meta,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch activity enquiries" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
