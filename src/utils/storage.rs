//! Object-storage collaborator for resume files. Thin REST wrapper: upload
//! into the configured bucket, derive the public URL, best-effort delete for
//! cleanup when the DB insert after an upload fails.

use crate::types::Context;
use chrono::Utc;
use regex::Regex;
use reqwest::Client;
use std::sync::Arc;

pub struct UploadedResume {
    pub public_url: String,
    pub path: String,
}

pub enum Error {
    UploadFailed,
    DeleteFailed,
}

pub fn sanitize_file_name(name: &str) -> String {
    let re = Regex::new(r"[^a-zA-Z0-9._-]").expect("valid file name pattern");
    re.replace_all(name, "_").to_string()
}

pub async fn upload_resume(
    ctx: Arc<Context>,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<UploadedResume, Error> {
    let path = format!(
        "careers/{}_{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    );

    let endpoint = format!(
        "{}/object/{}/{}",
        ctx.storage.endpoint, ctx.storage.bucket, path
    );

    let res = Client::new()
        .post(endpoint)
        .bearer_auth(ctx.storage.api_key.clone())
        .header("Content-Type", content_type.to_string())
        .body(bytes)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Resume upload request failed: {}", err);
            Error::UploadFailed
        })?;

    if !res.status().is_success() {
        tracing::error!("Resume upload rejected with status {}", res.status());
        return Err(Error::UploadFailed);
    }

    let public_url = format!(
        "{}/object/public/{}/{}",
        ctx.storage.endpoint, ctx.storage.bucket, path
    );

    Ok(UploadedResume { public_url, path })
}

pub async fn remove(ctx: Arc<Context>, path: &str) -> Result<(), Error> {
    let endpoint = format!(
        "{}/object/{}/{}",
        ctx.storage.endpoint, ctx.storage.bucket, path
    );

    Client::new()
        .delete(endpoint)
        .bearer_auth(ctx.storage.api_key.clone())
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Resume delete request failed: {}", err);
            Error::DeleteFailed
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_awkward_file_names() {
        assert_eq!(sanitize_file_name("my resume (final).pdf"), "my_resume__final_.pdf");
        assert_eq!(sanitize_file_name("cv.pdf"), "cv.pdf");
    }
}
