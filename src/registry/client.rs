//! Registry HTTP client.
//!
//! Fetches `<base>/r/<component>.json` with a single blocking GET. There is no
//! retry; every failure is terminal for the request.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::{MotionError, Result};
use crate::registry::manifest::Manifest;

/// Anything that can resolve a component name to a validated manifest.
pub trait ManifestSource {
    fn fetch(&self, component: &str) -> Result<Manifest>;
}

pub struct RegistryClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| MotionError::Config(format!("registry http client: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        Self::new(&config.url, config.timeout_secs)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn manifest_url(&self, component: &str) -> String {
        format!(
            "{}/r/{}.json",
            self.base_url,
            urlencoding::encode(component)
        )
    }
}

impl ManifestSource for RegistryClient {
    fn fetch(&self, component: &str) -> Result<Manifest> {
        let url = self.manifest_url(component);
        debug!(%url, "fetching manifest");

        let response = self
            .client
            .get(url.as_str())
            .header(USER_AGENT, concat!("motion/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|err| MotionError::Network {
                url: url.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "registry responded");

        if status == StatusCode::NOT_FOUND {
            return Err(MotionError::ComponentNotFound(component.to_string()));
        }
        if !status.is_success() {
            return Err(MotionError::FetchFailed {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response.text().map_err(|err| MotionError::Network {
            url: url.clone(),
            message: format!("reading response body: {err}"),
        })?;

        Manifest::parse(&body)
    }
}
