use std::time::Duration;

use url::Url;

/// Connection settings for the crawl backend.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the backend, e.g. `http://localhost:8000`.
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid api base url: {0}")]
    InvalidBase(#[from] url::ParseError),
    #[error("api base scheme {0:?} has no websocket equivalent")]
    UnsupportedScheme(String),
}

impl ClientSettings {
    /// Endpoint for job-creation requests.
    pub(crate) fn job_url(&self) -> Result<Url, SettingsError> {
        let base = Url::parse(&self.api_base)?;
        Ok(base.join("api/crawl")?)
    }

    /// WebSocket endpoint for the event stream scoped to `job_id`.
    pub fn stream_url(&self, job_id: &str) -> Result<Url, SettingsError> {
        let base = Url::parse(&self.api_base)?;
        let ws_scheme = match base.scheme() {
            "http" => "ws",
            "https" => "wss",
            other => return Err(SettingsError::UnsupportedScheme(other.to_string())),
        };
        let mut url = base.join(&format!("api/stream/{job_id}"))?;
        if url.set_scheme(ws_scheme).is_err() {
            return Err(SettingsError::UnsupportedScheme(ws_scheme.to_string()));
        }
        Ok(url)
    }
}
