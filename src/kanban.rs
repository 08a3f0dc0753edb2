//! Kanban Grouping
//!
//! Column membership is always derived from each item's status; there is
//! no separate membership index.

use crate::models::{parse_timestamp, Application};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub title: &'static str,
}

/// Application statuses in board order
pub const COLUMNS: &[Column] = &[
    Column { id: "Applied", title: "Applied" },
    Column { id: "Interview", title: "Interview" },
    Column { id: "Offer", title: "Offer" },
    Column { id: "Rejected", title: "Rejected" },
];

/// One card on the board
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanItem {
    pub id: String,
    pub status: String,
    pub candidate: String,
    pub job: String,
    pub updated_at: String,
    pub url: String,
}

impl From<&Application> for KanbanItem {
    fn from(app: &Application) -> Self {
        Self {
            id: app.application_id.clone(),
            status: app.status.clone(),
            candidate: app.candidate_id.clone(),
            job: format!("{} at {}", app.job_title, app.company),
            updated_at: app.updated_at.clone(),
            url: app.job_url.clone(),
        }
    }
}

impl KanbanItem {
    /// Last update as "YYYY-MM-DD HH:MM", or the raw value if unparsable
    pub fn updated_label(&self) -> String {
        parse_timestamp(&self.updated_at)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.updated_at.clone())
    }
}

pub fn to_items(apps: &[Application]) -> Vec<KanbanItem> {
    apps.iter().map(KanbanItem::from).collect()
}

/// Group items under their columns, in column order, keeping input order
/// inside each column. Items with an unknown status are left out.
pub fn group_by_column<'a>(columns: &[Column], items: &'a [KanbanItem]) -> Vec<(Column, Vec<&'a KanbanItem>)> {
    columns
        .iter()
        .map(|col| {
            let members = items.iter().filter(|item| item.status == col.id).collect();
            (*col, members)
        })
        .collect()
}

/// Which column currently shows `item_id`, found by scanning the grouping
pub fn column_of(columns: &[Column], items: &[KanbanItem], item_id: &str) -> Option<&'static str> {
    group_by_column(columns, items)
        .into_iter()
        .find(|(_, members)| members.iter().any(|i| i.id == item_id))
        .map(|(col, _)| col.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, status: &str) -> KanbanItem {
        KanbanItem {
            id: id.to_string(),
            status: status.to_string(),
            candidate: "c-1".to_string(),
            job: "Engineer at Acme".to_string(),
            updated_at: "2024-05-01T10:15:30".to_string(),
            url: String::new(),
        }
    }

    fn ids(members: &[&KanbanItem]) -> Vec<String> {
        members.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_group_preserves_relative_order() {
        let items = vec![
            item("1", "Offer"),
            item("2", "Applied"),
            item("3", "Offer"),
            item("4", "Applied"),
        ];
        let grouped = group_by_column(COLUMNS, &items);
        assert_eq!(grouped.len(), 4);
        assert_eq!(grouped[0].0.id, "Applied");
        assert_eq!(ids(&grouped[0].1), vec!["2", "4"]);
        assert!(grouped[1].1.is_empty());
        assert_eq!(ids(&grouped[2].1), vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_status_is_dropped() {
        let items = vec![item("1", "Applied"), item("2", "Archived"), item("3", "applied")];
        let grouped = group_by_column(COLUMNS, &items);
        let total: usize = grouped.iter().map(|(_, m)| m.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(column_of(COLUMNS, &items, "2"), None);
    }

    #[test]
    fn test_concatenation_matches_filtered_input_and_is_idempotent() {
        let items = vec![
            item("a", "Rejected"),
            item("b", "Applied"),
            item("c", "Legacy"),
            item("d", "Interview"),
            item("e", "Applied"),
        ];
        let grouped = group_by_column(COLUMNS, &items);
        let flattened: Vec<KanbanItem> = grouped
            .iter()
            .flat_map(|(_, m)| m.iter().map(|i| (*i).clone()))
            .collect();

        // Each column's slice keeps input order
        for (col, members) in &grouped {
            let expected: Vec<_> = items.iter().filter(|i| i.status == col.id).map(|i| i.id.clone()).collect();
            assert_eq!(ids(members), expected);
        }

        let regrouped = group_by_column(COLUMNS, &flattened);
        for ((c1, m1), (c2, m2)) in grouped.iter().zip(regrouped.iter()) {
            assert_eq!(c1, c2);
            assert_eq!(ids(m1), ids(m2));
        }
    }

    #[test]
    fn test_column_of_follows_status() {
        let mut items = vec![item("A1", "Applied"), item("B2", "Offer")];
        assert_eq!(column_of(COLUMNS, &items, "A1"), Some("Applied"));
        items[0].status = "Interview".to_string();
        assert_eq!(column_of(COLUMNS, &items, "A1"), Some("Interview"));
        assert_eq!(column_of(COLUMNS, &items, "missing"), None);
    }

    #[test]
    fn test_item_from_application() {
        let app = Application {
            application_id: "A1".into(),
            candidate_id: "c-7".into(),
            job_title: "Engineer".into(),
            company: "Acme".into(),
            job_url: "https://jobs/1".into(),
            status: "Applied".into(),
            created_at: "2024-05-01T09:00:00".into(),
            updated_at: "2024-05-01T10:15:30.5".into(),
        };
        let card = KanbanItem::from(&app);
        assert_eq!(card.id, "A1");
        assert_eq!(card.job, "Engineer at Acme");
        assert_eq!(card.candidate, "c-7");
        assert_eq!(card.updated_label(), "2024-05-01 10:15");
    }
}
