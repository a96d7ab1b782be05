use tracing::{field::display, Span};
use uuid::Uuid;

use crate::config::ExpectationSettings;
use crate::domain::{Expectation, ExpectationError};
use crate::probe_client::ProbeClient;
use crate::utils::error_chain_fmt;

pub const MAIN_PAGE_CONTENT: &str = "Main page content";
pub const MAIN_PAGE_CONTENT_LENGTH: &str = "Main page content length";

/// A named expectation on the target page.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub expectation: Expectation,
}

impl Check {
    pub fn new(name: impl Into<String>, expectation: Expectation) -> Self {
        Self {
            name: name.into(),
            expectation,
        }
    }
}

/// The main page content and content length checks.
pub fn default_checks(expectations: &ExpectationSettings) -> Vec<Check> {
    vec![
        Check::new(
            MAIN_PAGE_CONTENT,
            Expectation::BodyEquals(expectations.body.clone()),
        ),
        Check::new(
            MAIN_PAGE_CONTENT_LENGTH,
            Expectation::BodyLength(expectations.length),
        ),
    ]
}

#[derive(thiserror::Error)]
pub enum CheckError {
    #[error("failed to reach the target")]
    Transport(#[source] reqwest::Error),
    #[error("timed out waiting for the target")]
    Timeout(#[source] reqwest::Error),
    #[error(transparent)]
    Assertion(#[from] ExpectationError),
}

impl std::fmt::Debug for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}

impl CheckError {
    /// Whether the check failed before any body could be compared.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

/// Fetches the page once and verifies the check's expectation against it.
/// A transport failure ends the check without looking at a body.
#[tracing::instrument(
    name = "Running check",
    skip_all,
    fields(
        check = %check.name,
        run_id = %Uuid::new_v4(),
        status = tracing::field::Empty,
    ),
    err
)]
pub async fn run_check(client: &ProbeClient, check: &Check) -> Result<(), CheckError> {
    let page = client.fetch().await?;
    Span::current().record("status", &display(page.status));

    check.expectation.verify(&page.body)?;
    Ok(())
}
