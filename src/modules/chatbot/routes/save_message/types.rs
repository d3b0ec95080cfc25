pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub phone: String,
        pub message: String,
        #[serde(default)]
        pub response: Option<String>,
    }
}

pub mod response {
    use crate::modules::chatbot::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MessageSaved(repository::ChatbotMessage),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MessageSaved(message) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Message saved successfully",
                        "data": message,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingRequiredFields,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingRequiredFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Phone and message are required" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to save message" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
