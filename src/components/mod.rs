//! UI Components
//!
//! Reusable Leptos components.

mod activity_feed;
mod app_layout;
mod bulk_toolbar;
mod candidate_summary;
mod file_dropzone;
mod job_card;
mod kanban_board;
mod side_nav;
mod spinner;
mod toast_container;
mod top_bar;

pub use activity_feed::ActivityFeed;
pub use app_layout::AppLayout;
pub use bulk_toolbar::BulkToolbar;
pub use candidate_summary::CandidateSummary;
pub use file_dropzone::FileDropzone;
pub use job_card::JobCard;
pub use kanban_board::{CardMove, KanbanBoard};
pub use side_nav::SideNav;
pub use spinner::Spinner;
pub use toast_container::ToastContainer;
pub use top_bar::TopBar;
