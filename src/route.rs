//! Client-side Routing
//!
//! Five fixed pages addressed by path. `/` and unknown paths land on the
//! upload page.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Upload,
    Matches,
    Tracker,
    Settings,
    Notifications,
}

impl Route {
    /// Navigation order
    pub const ALL: [Route; 5] = [
        Route::Upload,
        Route::Matches,
        Route::Tracker,
        Route::Settings,
        Route::Notifications,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Upload => "/upload",
            Route::Matches => "/matches",
            Route::Tracker => "/tracker",
            Route::Settings => "/settings",
            Route::Notifications => "/notifications",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Upload => "Upload",
            Route::Matches => "Matches",
            Route::Tracker => "Tracker",
            Route::Settings => "Settings",
            Route::Notifications => "Notifications",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Upload => "⇪",
            Route::Matches => "⌕",
            Route::Tracker => "▥",
            Route::Settings => "⚙",
            Route::Notifications => "🔔",
        }
    }

    /// Resolve a location path (query and fragment ignored)
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .unwrap_or(Route::Upload)
    }
}

/// Current route, shared through context
#[derive(Clone, Copy)]
pub struct Router {
    current: RwSignal<Route>,
}

impl Router {
    /// Start from the browser location, normalising it to a known path
    pub fn from_location() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let route = Route::from_path(&path);
        if path != route.path() {
            replace_history(route);
        }
        let router = Self { current: RwSignal::new(route) };
        router.bind_popstate();
        router
    }

    /// Current route (tracked)
    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn navigate(&self, route: Route) {
        if self.current.get_untracked() == route {
            return;
        }
        log::debug!("[ROUTE] -> {}", route.path());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
        }
        self.current.set(route);
    }

    /// Like `navigate` but replaces the history entry, for redirects
    pub fn redirect(&self, route: Route) {
        log::debug!("[ROUTE] redirect -> {}", route.path());
        replace_history(route);
        self.current.set(route);
    }

    fn bind_popstate(&self) {
        let current = self.current;
        let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
            let path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            current.try_set(Route::from_path(&path));
        });
        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        // Router lives for the whole session
        on_popstate.forget();
    }
}

fn replace_history(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
    }
}
