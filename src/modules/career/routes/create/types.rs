pub mod request {
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Payload {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub position: String,
        pub education_qualification: Option<String>,
        pub gender: Option<String>,
        pub address: Option<String>,
        #[form_data(limit = "10MiB")]
        pub resume: FieldData<NamedTempFile>,
    }
}

pub mod response {
    use crate::modules::career::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ApplicationSubmitted(Box<repository::CareerApplication>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationSubmitted(application) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Application submitted successfully!",
                        "application": application,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingRequiredFields,
        InvalidEmail,
        InvalidPhoneNumber,
        InvalidFileType,
        ResumeUploadFailed,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingRequiredFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Missing required fields" })),
                )
                    .into_response(),
                Self::InvalidEmail => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid email format" })),
                )
                    .into_response(),
                Self::InvalidPhoneNumber => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid phone number. Must be 10 digits after +91" })),
                )
                    .into_response(),
                Self::InvalidFileType => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid file type. Allowed: PDF, DOC, DOCX, TXT, RTF" })),
                )
                    .into_response(),
                Self::ResumeUploadFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload resume" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to save application" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
