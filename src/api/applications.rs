//! Application Tracking Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{segment, ApiClient};
use crate::error::Result;
use crate::models::Application;

#[derive(Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

pub async fn list_applications(api: &ApiClient) -> Result<Vec<Application>> {
    api.get_json("/api/applications").await
}

/// Persist a new status for one application
pub async fn update_application_status(api: &ApiClient, application_id: &str, status: &str) -> Result<()> {
    let path = format!("/api/applications/{}", segment(application_id));
    api.send_json_unit(Method::PATCH, &path, &StatusUpdate { status }).await
}
