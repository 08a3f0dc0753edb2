//! Job Matching and Apply Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{segment, ApiClient};
use crate::error::Result;
use crate::models::JobPosting;

#[derive(Serialize)]
struct ApplyRequest<'a> {
    candidate_id: &'a str,
    jobs: &'a [JobPosting],
}

/// Acknowledgement of queued applications
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplyReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn fetch_jobs(api: &ApiClient, candidate_id: &str) -> Result<Vec<JobPosting>> {
    api.get_json(&format!("/api/jobs/{}", segment(candidate_id))).await
}

pub async fn submit_applications(api: &ApiClient, candidate_id: &str, jobs: &[JobPosting]) -> Result<ApplyReceipt> {
    log::info!("[API] Applying to {} job(s) for {}", jobs.len(), candidate_id);
    api.send_json(Method::POST, "/api/apply", &ApplyRequest { candidate_id, jobs }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_request_shape() {
        let jobs = vec![JobPosting {
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            url: "https://jobs/1".into(),
            description: None,
            score: None,
        }];
        let value = serde_json::to_value(ApplyRequest { candidate_id: "c-1", jobs: &jobs }).unwrap();
        assert_eq!(value["candidate_id"], "c-1");
        assert_eq!(value["jobs"][0]["url"], "https://jobs/1");
        assert!(value["jobs"][0].get("score").is_none());
    }

    #[test]
    fn test_receipt_tolerates_missing_fields() {
        let receipt: ApplyReceipt = serde_json::from_str(r#"{"message":"Successfully queued 2 job applications"}"#).unwrap();
        assert_eq!(receipt.message.as_deref(), Some("Successfully queued 2 job applications"));
        let receipt: ApplyReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.message.is_none());
    }
}
