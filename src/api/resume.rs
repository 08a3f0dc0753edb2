//! Résumé Upload Endpoint

use reqwest::multipart::{Form, Part};
use wasm_bindgen_futures::JsFuture;

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::Candidate;

/// File types the parser accepts
pub const RESUME_EXTENSIONS: &[&str] = &[".pdf", ".docx"];

/// Whether `file_name` has one of `extensions` (case-insensitive)
pub fn accepts_file(file_name: &str, extensions: &[&str]) -> bool {
    let lower = file_name.to_ascii_lowercase();
    extensions.iter().any(|ext| lower.len() > ext.len() && lower.ends_with(&ext.to_ascii_lowercase()))
}

async fn read_file(file: &web_sys::File) -> Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Upload a résumé as multipart field `file`; returns the parsed candidate
pub async fn upload_resume(api: &ApiClient, file: &web_sys::File) -> Result<Candidate> {
    let name = file.name();
    let bytes = read_file(file).await?;
    log::info!("[API] Uploading {} ({} bytes)", name, bytes.len());

    let mut part = Part::bytes(bytes).file_name(name);
    let mime = file.type_();
    if !mime.is_empty() {
        part = part.mime_str(&mime)?;
    }
    let form = Form::new().part("file", part);

    let url = api.url("/resume");
    let resp = api.http.post(&url).multipart(form).send().await?;
    super::decode(super::check(resp).await?).await
}
