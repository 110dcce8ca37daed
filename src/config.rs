//! Runtime Configuration
//!
//! Where the task store lives and how chatty the console is.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// `<meta name="task-api-url" content="...">` in the host page overrides the build value
const API_URL_META: &str = "meta[name=\"task-api-url\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// `TASK_API_URL` at build time, else the default
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TASK_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Host page meta tag first, then the build value
    pub fn resolve() -> Self {
        match page_api_url() {
            Some(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::from_build_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn page_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_URL_META).ok()??;
    meta.get_attribute("content")
}

/// Console log level from `TASK_LOG` at build time
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("TASK_LOG"))
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
