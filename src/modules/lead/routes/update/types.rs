pub mod request {
    use chrono::NaiveDate;
    use serde::Deserialize;

    fn default_added_by() -> String {
        "System".to_string()
    }

    /// Flat edit shape used by the dashboard inline editor; column-style
    /// field names rather than the nested intake-form blocks.
    #[derive(Deserialize)]
    pub struct LeadData {
        pub father_name: Option<String>,
        pub father_phone: Option<String>,
        pub father_email: Option<String>,
        pub father_occupation: Option<String>,
        pub father_annual_income: Option<String>,
        pub mother_name: Option<String>,
        pub mother_phone: Option<String>,
        pub mother_email: Option<String>,
        pub mother_occupation: Option<String>,
        pub mother_annual_income: Option<String>,
        pub guardian_name: Option<String>,
        pub guardian_phone: Option<String>,
        pub guardian_email: Option<String>,
        pub guardian_relationship: Option<String>,
        pub guardian_occupation: Option<String>,
        pub guardian_annual_income: Option<String>,
        pub campaign: Option<String>,
        pub source: Option<String>,
        pub sub_source: Option<String>,
        pub status: Option<String>,
        pub stage: Option<String>,
    }

    #[derive(Deserialize)]
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

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub lead_data: LeadData,
        #[serde(default)]
        pub children: Vec<ChildPayload>,
        #[serde(default = "default_added_by")]
        pub added_by: String,
    }
}

pub mod response {
    use crate::modules::lead::repository;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LeadUpdated(Box<repository::Lead>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LeadUpdated(lead) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Lead updated successfully",
                        "lead": lead,
                    })),
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
                    Json(json!({ "error": "Failed to update lead" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
