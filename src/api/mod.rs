//! Backend API Wrappers
//!
//! Frontend bindings to the REST backend, organized by domain. Any non-2xx
//! response is an error.

mod applications;
mod jobs;
mod logs;
mod resume;
mod settings;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};

// Re-export all public items
pub use applications::*;
pub use jobs::*;
pub use logs::*;
pub use resume::*;
pub use settings::*;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode one path segment (ids may contain anything)
pub(crate) fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, http: reqwest::Client::new() }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        log::debug!("[API] GET {}", url);
        let resp = self.http.get(&url).send().await?;
        decode(check(resp).await?).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("[API] {} {}", method, url);
        let resp = self.http.request(method, &url).json(body).send().await?;
        decode(check(resp).await?).await
    }

    /// Like `send_json` but only the status matters
    pub(crate) async fn send_json_unit<B>(&self, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        log::debug!("[API] {} {}", method, url);
        let resp = self.http.request(method, &url).json(body).send().await?;
        check(resp).await.map(|_| ())
    }
}

/// Turn non-2xx responses into `ApiError::Status`
async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("[API] {} {}: {}", url, status, snippet(&body));
    Err(ApiError::Status { status: status.as_u16(), body })
}

fn snippet(body: &str) -> &str {
    let cut = body.char_indices().nth(120).map(|(i, _)| i).unwrap_or(body.len());
    &body[..cut]
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}
