use super::types::{request, response};
use crate::{
    modules::career::repository,
    types::Context,
    utils::{phone, storage},
};
use std::io::Read;
use std::sync::Arc;

const ALLOWED_RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "application/rtf",
];

fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    let position = payload.position.trim().to_string();

    if name.is_empty() || email.is_empty() || payload.phone.trim().is_empty() || position.is_empty()
    {
        return Err(response::Error::MissingRequiredFields);
    }

    if !is_valid_email(&email) {
        return Err(response::Error::InvalidEmail);
    }

    let formatted_phone =
        phone::to_indian_format(&payload.phone).ok_or(response::Error::InvalidPhoneNumber)?;

    let file_name = payload
        .resume
        .metadata
        .file_name
        .clone()
        .unwrap_or_else(|| "resume".to_string());
    let content_type = payload
        .resume
        .metadata
        .content_type
        .clone()
        .unwrap_or_default();

    if !ALLOWED_RESUME_TYPES.contains(&content_type.as_str()) {
        return Err(response::Error::InvalidFileType);
    }

    let mut bytes: Vec<u8> = vec![];
    payload
        .resume
        .contents
        .read_to_end(&mut bytes)
        .map_err(|err| {
            tracing::error!("Failed to read the uploaded resume: {err:?}");
            response::Error::ResumeUploadFailed
        })?;
    let file_size = bytes.len() as i64;

    let uploaded = storage::upload_resume(ctx.clone(), &file_name, &content_type, bytes)
        .await
        .map_err(|_| response::Error::ResumeUploadFailed)?;

    let application = match repository::create(
        &ctx.db_conn.pool,
        repository::CreateApplicationPayload {
            name,
            email,
            phone: formatted_phone,
            position,
            education_qualification: payload
                .education_qualification
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            gender: payload.gender.filter(|value| !value.is_empty()),
            address: payload
                .address
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            resume_url: uploaded.public_url.clone(),
            resume_file_name: file_name,
            resume_file_size: file_size,
            resume_file_type: content_type,
        },
    )
    .await
    {
        Ok(application) => application,
        Err(_) => {
            // The upload is orphaned if the insert failed; remove it.
            if storage::remove(ctx.clone(), &uploaded.path).await.is_err() {
                tracing::error!("Failed to clean up orphaned resume at {}", uploaded.path);
            }
            return Err(response::Error::UnexpectedError);
        }
    };

    Ok(response::Success::ApplicationSubmitted(Box::new(
        application,
    )))
}
