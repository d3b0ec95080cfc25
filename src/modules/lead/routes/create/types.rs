pub mod request {
    use chrono::NaiveDate;
    use serde::Deserialize;
    use validator::Validate;

    fn default_added_by() -> String {
        "System".to_string()
    }

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct FatherBlock {
        #[validate(length(min = 1, code = "FATHER_NAME_REQUIRED", message = "Father name is required"))]
        pub name: String,
        #[validate(length(min = 1, code = "FATHER_PHONE_REQUIRED", message = "Father phone is required"))]
        pub phone: String,
        pub email: Option<String>,
        pub occupation: Option<String>,
        pub annual_income: Option<String>,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct ParentBlock {
        pub name: Option<String>,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub relationship: Option<String>,
        pub occupation: Option<String>,
        pub annual_income: Option<String>,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct ProjectBlock {
        pub campaign: Option<String>,
        pub source: Option<String>,
        pub sub_source: Option<String>,
    }

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct LeadData {
        #[validate(nested)]
        pub father: FatherBlock,
        #[serde(default)]
        pub mother: Option<ParentBlock>,
        #[serde(default)]
        pub guardian: Option<ParentBlock>,
        #[serde(default)]
        pub project: Option<ProjectBlock>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChildPayload {
        pub name: String,
        pub grade: Option<String>,
        pub intake_year: Option<String>,
        pub date_of_birth: Option<NaiveDate>,
        pub gender: Option<String>,
        pub address: Option<String>,
        pub blood_group: Option<String>,
        pub previous_school: Option<String>,
        pub reason_for_quitting: Option<String>,
    }

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(length(min = 1, code = "TOKEN_REQUIRED", message = "Verification token is required"))]
        pub verification_token: String,
        #[validate(nested)]
        pub lead_data: LeadData,
        #[serde(default)]
        pub children: Vec<ChildPayload>,
        #[serde(default)]
        pub user_id: Option<String>,
        #[serde(default = "default_added_by")]
        pub added_by: String,
    }
}

pub mod response {
    use crate::modules::lead::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub struct Created {
        pub lead: repository::Lead,
        pub children: Vec<repository::Child>,
    }

    pub enum Success {
        LeadCreated(Box<Created>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LeadCreated(created) => {
                    let application_no = created.lead.application_no.clone();
                    (
                        StatusCode::CREATED,
                        Json(json!({
                            "success": true,
                            "message": "Lead created successfully",
                            "lead": created.lead,
                            "children": created.children,
                            "applicationNo": application_no,
                        })),
                    )
                        .into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidatePayload(validator::ValidationErrors),
        InvalidToken,
        TokenExpired,
        PhoneMismatch,
        DuplicateLead(Option<repository::Lead>),
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidatePayload(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::InvalidToken => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid verification token" })),
                )
                    .into_response(),
                Self::TokenExpired => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Verification token expired" })),
                )
                    .into_response(),
                Self::PhoneMismatch => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Phone number verification failed" })),
                )
                    .into_response(),
                Self::DuplicateLead(existing) => (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "success": false,
                        "error": "A lead with this phone number already exists",
                        "existingLead": existing.map(|lead| json!({
                            "id": lead.id,
                            "application_no": lead.application_no,
                        })),
                    })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create lead" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
