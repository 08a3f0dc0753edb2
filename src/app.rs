//! Stealth Dash Frontend App
//!
//! Creates the session services, provides them through context and renders
//! the page for the current route inside the shared layout.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::AppLayout;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{MatchesPage, NotificationsPage, SettingsPage, TrackerPage, UploadPage};
use crate::route::{Route, Router};
use crate::store::{AppState, AppStore};
use crate::timer::BrowserScheduler;
use crate::toast::Toaster;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[APP] Backend at {}", config.api_base);

    let toaster = Toaster::new(Rc::new(BrowserScheduler), config.toast_duration_ms);
    let router = Router::from_location();
    let store: AppStore = AppStore::new(AppState::default());
    let api = ApiClient::new(config.api_base.clone());

    provide_context(toaster);
    provide_context(store);
    provide_context(AppContext::new(router, toaster, api, config));

    // Pending toast timers die with the app
    on_cleanup(move || toaster.clear());

    view! {
        <AppLayout>
            {move || match router.current() {
                Route::Upload => view! { <UploadPage /> }.into_any(),
                Route::Matches => view! { <MatchesPage /> }.into_any(),
                Route::Tracker => view! { <TrackerPage /> }.into_any(),
                Route::Settings => view! { <SettingsPage /> }.into_any(),
                Route::Notifications => view! { <NotificationsPage /> }.into_any(),
            }}
        </AppLayout>
    }
}
