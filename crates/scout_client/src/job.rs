use scout_core::CrawlRequest;
use serde::{Deserialize, Serialize};

use crate::settings::ClientSettings;

/// Failure of the one-shot job-creation call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct JobError {
    pub kind: JobFailureKind,
    pub message: String,
}

impl JobError {
    pub(crate) fn new(kind: JobFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobFailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("malformed response")]
    MalformedResponse,
}

/// Body of the job-creation request, as the backend expects it.
#[derive(Debug, Serialize)]
struct JobRequestBody<'a> {
    url: &'a str,
    keywords: &'a [String],
    depth: u8,
}

#[derive(Debug, Deserialize)]
struct JobCreatedBody {
    job_id: String,
}

/// Issues the one-shot job-creation request for a crawl session.
#[async_trait::async_trait]
pub trait JobStarter: Send + Sync {
    /// Returns the backend-assigned job identifier on success.
    async fn create_job(&self, request: &CrawlRequest) -> Result<String, JobError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobStarter {
    settings: ClientSettings,
}

impl ReqwestJobStarter {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, JobError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| JobError::new(JobFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobStarter for ReqwestJobStarter {
    async fn create_job(&self, request: &CrawlRequest) -> Result<String, JobError> {
        let endpoint = self
            .settings
            .job_url()
            .map_err(|err| JobError::new(JobFailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let body = JobRequestBody {
            url: &request.target,
            keywords: &request.keywords,
            depth: request.depth,
        };

        let response = client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobError::new(
                JobFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let created: JobCreatedBody = response
            .json()
            .await
            .map_err(|err| JobError::new(JobFailureKind::MalformedResponse, err.to_string()))?;
        Ok(created.job_id)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> JobError {
    if err.is_timeout() {
        return JobError::new(JobFailureKind::Timeout, err.to_string());
    }
    JobError::new(JobFailureKind::Network, err.to_string())
}
