//! Optimistic Status Moves
//!
//! A committed card drop changes the item's status locally before the
//! backend confirms. The pre-move list is kept whole so a failed save can
//! put it back exactly.

use crate::error::ApiError;
use crate::models::Application;
use crate::toast::Notification;

/// Copy of `apps` where `item_id` carries `status`; other items untouched
pub fn with_status(apps: &[Application], item_id: &str, status: &str) -> Vec<Application> {
    apps.iter()
        .map(|app| {
            if app.application_id == item_id {
                Application { status: status.to_string(), ..app.clone() }
            } else {
                app.clone()
            }
        })
        .collect()
}

/// A status change waiting for the backend
#[derive(Debug, Clone)]
pub struct StatusMove {
    pub item_id: String,
    pub from: String,
    pub to: String,
    snapshot: Vec<Application>,
    optimistic: Vec<Application>,
}

/// What to do once the backend answered
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    /// List to render instead of the optimistic one, on failure
    pub restore: Option<Vec<Application>>,
    pub toast: Notification,
}

impl StatusMove {
    pub fn begin(current: Vec<Application>, item_id: String, from: String, to: String) -> Self {
        let optimistic = with_status(&current, &item_id, &to);
        Self { item_id, from, to, snapshot: current, optimistic }
    }

    /// List to render right away
    pub fn optimistic(&self) -> Vec<Application> {
        self.optimistic.clone()
    }

    pub fn settle(self, outcome: Result<(), ApiError>) -> Settled {
        match outcome {
            Ok(()) => Settled {
                restore: None,
                toast: Notification::success("Success", "Application status updated successfully"),
            },
            Err(err) => {
                log::error!(
                    "[TRACKER] Moving {} from {} to {} failed: {}",
                    self.item_id, self.from, self.to, err
                );
                Settled {
                    restore: Some(self.snapshot),
                    toast: Notification::error("Error", "Failed to update application status"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kanban::{column_of, to_items, COLUMNS};
    use crate::toast::{ToastQueue, Variant};

    fn app(id: &str, status: &str) -> Application {
        Application {
            application_id: id.into(),
            candidate_id: "c-1".into(),
            job_title: "Engineer".into(),
            company: "Acme".into(),
            job_url: format!("https://jobs/{}", id),
            status: status.into(),
            created_at: "2024-05-01T09:00:00".into(),
            updated_at: "2024-05-01T09:00:00".into(),
        }
    }

    fn status_of(apps: &[Application], id: &str) -> Option<&'static str> {
        column_of(COLUMNS, &to_items(apps), id)
    }

    fn start(apps: Vec<Application>) -> StatusMove {
        StatusMove::begin(apps, "A1".into(), "Applied".into(), "Interview".into())
    }

    #[test]
    fn test_with_status_touches_only_target() {
        let apps = vec![app("A1", "Applied"), app("B2", "Offer")];
        let moved = with_status(&apps, "A1", "Interview");
        assert_eq!(moved[0].status, "Interview");
        assert_eq!(moved[1], apps[1]);
        assert_eq!(apps[0].status, "Applied");
    }

    #[test]
    fn test_failed_save_restores_snapshot_with_one_error_toast() {
        let apps = vec![app("A1", "Applied"), app("B2", "Offer")];
        let mv = start(apps.clone());
        let mut rendered = mv.optimistic();
        assert_eq!(status_of(&rendered, "A1"), Some("Interview"));

        let mut toasts = ToastQueue::new();
        let settled = mv.settle(Err(ApiError::Status { status: 500, body: String::new() }));
        if let Some(list) = settled.restore {
            rendered = list;
        }
        toasts.push(settled.toast, 4000);

        assert_eq!(rendered, apps);
        assert_eq!(status_of(&rendered, "A1"), Some("Applied"));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.toasts()[0].variant, Variant::Error);
    }

    #[test]
    fn test_successful_save_keeps_move_with_one_success_toast() {
        let mv = start(vec![app("A1", "Applied")]);
        let rendered = mv.optimistic();

        let mut toasts = ToastQueue::new();
        let settled = mv.settle(Ok(()));
        assert!(settled.restore.is_none());
        toasts.push(settled.toast, 4000);

        assert_eq!(status_of(&rendered, "A1"), Some("Interview"));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.toasts()[0].variant, Variant::Success);
    }

    #[test]
    fn test_rollback_restores_whole_list_not_a_patch() {
        let apps = vec![app("A1", "Applied"), app("B2", "Offer")];
        let mv = start(apps.clone());
        let settled = mv.settle(Err(ApiError::Network("offline".into())));
        assert_eq!(settled.restore, Some(apps));
    }
}
