//! Builder for creating and configuring ConsoleClient instances.

use std::time::Duration;

use reqwest::header;

use super::ConsoleClient;
use crate::{
    config::{ConsoleConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS},
    error::{ConsoleError, Result},
};

/// Builder for creating and configuring ConsoleClient instances.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Takes base URL and timeout from a loaded configuration.
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new()
            .with_base_url(&config.base_url)
            .with_timeout(config.timeout())
    }

    /// Sets the API base URL. Defaults to [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout. Defaults to 10 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Configuration` if the base URL is invalid or
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ConsoleClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let config = ConsoleConfig {
            base_url,
            ..Default::default()
        };
        let url = config.parsed_base_url()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            )
            .default_headers(headers)
            .build()
            .map_err(|e| ConsoleError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = url.as_str().trim_end_matches('/').to_string();
        log::debug!("Console client targeting {base_url}");
        Ok(ConsoleClient::new(http, base_url))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
