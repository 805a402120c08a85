use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_UPLOAD_PATH: &str = "/resume/upload/";
const DEFAULT_SEARCH_PATH: &str = "/resume/search/";

/// Client configuration loaded from environment variables.
/// Fails at startup if `DASHBOARD_BASE_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub upload_path: String,
    pub search_path: String,
    /// Anti-forgery token sent as the `csrfmiddlewaretoken` upload field.
    pub csrf_token: Option<String>,
    /// Raw `Cookie` header carrying the session and `csrftoken` cookies.
    pub cookie: Option<String>,
    pub http_timeout_secs: u64,
    pub rust_log: String,
    pub timings: UiTimings,
}

/// Delays used by the widgets for deferred UI work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTimings {
    pub page_reload: Duration,
    pub panel_fade: Duration,
    pub toast_visible: Duration,
    pub toast_fade: Duration,
    pub picker_cooldown: Duration,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            page_reload: Duration::from_millis(1200),
            panel_fade: Duration::from_millis(300),
            toast_visible: Duration::from_millis(4000),
            toast_fade: Duration::from_millis(300),
            picker_cooldown: Duration::from_millis(350),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            base_url: require_env("DASHBOARD_BASE_URL")?,
            upload_path: std::env::var("DASHBOARD_UPLOAD_PATH")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_PATH.to_string()),
            search_path: std::env::var("DASHBOARD_SEARCH_PATH")
                .unwrap_or_else(|_| DEFAULT_SEARCH_PATH.to_string()),
            csrf_token: optional_env("DASHBOARD_CSRF_TOKEN"),
            cookie: optional_env("DASHBOARD_COOKIE"),
            http_timeout_secs: std::env::var("DASHBOARD_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("DASHBOARD_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            timings: UiTimings::default(),
        })
    }

    /// A configuration pointing at `base_url` with every other setting defaulted.
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            csrf_token: None,
            cookie: None,
            http_timeout_secs: 120,
            rust_log: "info".to_string(),
            timings: UiTimings::default(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
