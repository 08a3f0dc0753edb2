//! Activity Log Endpoint

use serde::Deserialize;

use super::ApiClient;
use crate::error::Result;
use crate::models::LogEvent;

#[derive(Deserialize)]
struct LogsResponse {
    #[serde(default)]
    events: Vec<LogEvent>,
}

pub async fn fetch_logs(api: &ApiClient) -> Result<Vec<LogEvent>> {
    let resp: LogsResponse = api.get_json("/logs").await?;
    Ok(resp.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    #[test]
    fn test_logs_envelope() {
        let resp: LogsResponse = serde_json::from_str(
            r#"{"events":[{"timestamp":"2024-05-01T09:00:00","type":"apply","message":"Applied to Acme"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.events.len(), 1);
        assert_eq!(resp.events[0].kind, EventKind::Apply);

        let empty: LogsResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.events.is_empty());
    }
}
