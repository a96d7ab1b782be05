use reqwest::Client;
use std::time::Duration;

use crate::domain::TargetUrl;

/// HTTP client that fetches the page under test.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    http_client: Client,
    target: TargetUrl,
}

/// Status and decoded body of one probe.
#[derive(Debug)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeClient {
    pub fn new(target: TargetUrl, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            target,
        })
    }

    pub fn target(&self) -> &TargetUrl {
        &self.target
    }

    /// Sends one GET to the target with default headers and no body.
    /// The status is returned as-is, never turned into an error.
    #[tracing::instrument(name = "Fetching target page", skip(self), fields(target = %self.target))]
    pub async fn fetch(&self) -> Result<PageResponse, reqwest::Error> {
        let response = self
            .http_client
            .get(self.target.as_ref().clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(PageResponse { status, body })
    }
}
