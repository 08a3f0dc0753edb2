//! Frontend Models
//!
//! Data structures matching backend payloads.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Candidate profile returned by résumé upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "total_experience", alias = "experienceYears")]
    pub experience_years: Option<f64>,
    /// Whatever else the parser produced
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Candidate {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.candidate_id)
    }
}

/// Job posting as sent by the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Score shown when the matcher did not rank a posting
pub const DEFAULT_MATCH_SCORE: u8 = 75;

/// Job card view model
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// The backend has no job id; the posting URL is unique
    pub id: String,
    pub score: u8,
    pub posting: JobPosting,
}

impl From<JobPosting> for Job {
    fn from(posting: JobPosting) -> Self {
        let score = posting
            .score
            .filter(|s| s.is_finite())
            .map(|s| s.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(DEFAULT_MATCH_SCORE);
        Self { id: posting.url.clone(), score, posting }
    }
}

/// Tracked application (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: String,
    pub candidate_id: String,
    pub job_title: String,
    pub company: String,
    pub job_url: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub parser: String,
}

/// Résumé parsers the backend understands: (value, label)
pub const PARSER_OPTIONS: &[(&str, &str)] = &[
    ("pyresparser", "pyresparser"),
    ("google-docai", "Google Document AI"),
    ("gpt4-text", "GPT-4 text parse"),
];

pub const DEFAULT_PARSER: &str = "pyresparser";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Apply,
    Error,
}

/// Entry of the backend activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub message: String,
}

/// Parse backend timestamps. Accepts RFC 3339 and the naive ISO form the
/// backend writes for UTC times.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_accepts_backend_shape() {
        let json = r#"{
            "candidate_id": "c-42",
            "name": "Ada",
            "skills": ["rust", "sql"],
            "total_experience": 6.5,
            "status": "Pending"
        }"#;
        let c: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.candidate_id, "c-42");
        assert_eq!(c.experience_years, Some(6.5));
        assert_eq!(c.extra.get("status").and_then(|v| v.as_str()), Some("Pending"));
        assert_eq!(c.display_name(), "Ada");
    }

    #[test]
    fn test_candidate_name_falls_back_to_id() {
        let c: Candidate = serde_json::from_str(r#"{"candidate_id":"c-1"}"#).unwrap();
        assert_eq!(c.display_name(), "c-1");
        assert!(c.skills.is_empty());
    }

    #[test]
    fn test_job_uses_url_as_id_and_default_score() {
        let posting: JobPosting = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","location":"Remote","url":"https://jobs/1"}"#,
        )
        .unwrap();
        let job = Job::from(posting);
        assert_eq!(job.id, "https://jobs/1");
        assert_eq!(job.score, DEFAULT_MATCH_SCORE);
    }

    #[test]
    fn test_job_keeps_ranked_score() {
        let posting = JobPosting {
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            url: "u".into(),
            description: None,
            score: Some(88.6),
        };
        assert_eq!(Job::from(posting).score, 89);
    }

    #[test]
    fn test_log_event_type_field() {
        let ev: LogEvent = serde_json::from_str(
            r#"{"timestamp":"2024-05-01T10:00:00","type":"error","message":"boom"}"#,
        )
        .unwrap();
        assert_eq!(ev.kind, EventKind::Error);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let naive = parse_timestamp("2024-05-01T10:15:30.123456").unwrap();
        assert_eq!(naive.to_string(), "2024-05-01 10:15:30.123456");

        let utc = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(utc.to_string(), "2024-05-01 10:00:00");

        assert!(parse_timestamp("yesterday").is_none());
    }
}
