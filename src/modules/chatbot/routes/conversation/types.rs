pub mod response {
    use crate::modules::chatbot::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Conversation {
            user: Box<repository::ChatbotUser>,
            messages: Vec<repository::ChatbotMessage>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Conversation { user, messages } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "user": user,
                        "messages": messages,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch conversation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
