//! Application Configuration
//!
//! Values are baked in at build time through `JOBDASH_*` environment
//! variables; anything missing or unparsable falls back to a default.

use log::LevelFilter;

/// Default toast lifetime
pub const DEFAULT_TOAST_MS: u32 = 4000;

/// Pointer travel before a press becomes a drag
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 10;

/// Used when neither an override nor a page origin is available
pub const FALLBACK_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base: String,
    pub toast_duration_ms: u32,
    pub drag_threshold_px: i32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            toast_duration_ms: DEFAULT_TOAST_MS,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from compile-time overrides, using the page origin as API base
    /// when none is given.
    pub fn load() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::from_overrides(
            option_env!("JOBDASH_API_BASE"),
            origin.as_deref(),
            option_env!("JOBDASH_TOAST_MS"),
            option_env!("JOBDASH_DRAG_THRESHOLD"),
            option_env!("JOBDASH_LOG"),
        )
    }

    pub fn from_overrides(
        api_base: Option<&str>,
        origin: Option<&str>,
        toast_ms: Option<&str>,
        drag_threshold: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .or(origin)
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        Self {
            api_base,
            toast_duration_ms: Some(parse_or("JOBDASH_TOAST_MS", toast_ms, defaults.toast_duration_ms))
                .filter(|&ms| ms > 0)
                .unwrap_or(DEFAULT_TOAST_MS),
            drag_threshold_px: parse_or("JOBDASH_DRAG_THRESHOLD", drag_threshold, defaults.drag_threshold_px)
                .max(0),
            log_level: parse_or("JOBDASH_LOG", log_level, defaults.log_level),
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, raw: Option<&str>, default: T) -> T {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("[CONFIG] Ignoring invalid {}={:?}", name, s);
            default
        }),
    }
}
