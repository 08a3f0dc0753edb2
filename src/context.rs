//! Application Context
//!
//! Session services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::route::{Route, Router};
use crate::toast::{Notification, Toaster};

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub router: Router,
    pub toaster: Toaster,
    api: StoredValue<ApiClient, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(router: Router, toaster: Toaster, api: ApiClient, config: AppConfig) -> Self {
        Self {
            router,
            toaster,
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        }
    }

    /// Backend client
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn navigate(&self, route: Route) {
        self.router.navigate(route);
    }

    /// Log a failure and show it as exactly one error toast
    pub fn report(&self, title: &str, description: &str, err: &ApiError) {
        log::error!("[APP] {}: {} ({})", title, description, err);
        self.toaster.add(Notification::error(title, description));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
