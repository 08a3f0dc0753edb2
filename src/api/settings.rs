//! Settings Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::Result;
use crate::models::Settings;

pub async fn get_settings(api: &ApiClient) -> Result<Settings> {
    api.get_json("/api/settings").await
}

pub async fn save_settings(api: &ApiClient, parser: &str) -> Result<()> {
    let body = Settings { parser: parser.to_string() };
    api.send_json_unit(Method::POST, "/api/settings", &body).await
}
