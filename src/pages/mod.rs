//! Pages
//!
//! One component per route.

mod matches;
mod notifications;
mod settings;
mod tracker;
mod upload;

pub use matches::MatchesPage;
pub use notifications::NotificationsPage;
pub use settings::SettingsPage;
pub use tracker::TrackerPage;
pub use upload::UploadPage;
