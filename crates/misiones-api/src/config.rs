//! Server configuration read from environment variables.

use std::path::PathBuf;

use misiones_gateway::email_relay::DEFAULT_RELAY_URL;
use misiones_news::domain::pagination::DEFAULT_PAGE_SIZE;
use misiones_regions::domain::fills::DESKTOP_BREAKPOINT;

use crate::error::AppError;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Root of the remote news API.
    pub news_api_base_url: String,
    pub email_service_id: String,
    pub email_template_id: String,
    pub email_public_key: String,
    pub email_relay_url: String,
    /// YAML region map replacing the bundled one.
    pub region_map_path: Option<PathBuf>,
    /// Viewport width (px) from which hover is enabled.
    pub desktop_breakpoint: f64,
    pub news_page_size: usize,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a required variable is missing or a
    /// value does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a required variable is missing or a
    /// value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} environment variable must be set")))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };

        let desktop_breakpoint = match lookup("DESKTOP_BREAKPOINT") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .ok_or_else(|| {
                    AppError::Config(format!("DESKTOP_BREAKPOINT must be a positive number, got {raw:?}"))
                })?,
            None => DESKTOP_BREAKPOINT,
        };

        let news_page_size = match lookup("NEWS_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!("NEWS_PAGE_SIZE must be a positive integer, got {raw:?}"))
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            news_api_base_url: required("NEWS_API_BASE_URL")?,
            email_service_id: required("EMAILJS_SERVICE_ID")?,
            email_template_id: required("EMAILJS_TEMPLATE_ID")?,
            email_public_key: required("EMAILJS_PUBLIC_KEY")?,
            email_relay_url: lookup("EMAIL_RELAY_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
            region_map_path: lookup("REGION_MAP_PATH").map(PathBuf::from),
            desktop_breakpoint,
            news_page_size,
        })
    }
}
