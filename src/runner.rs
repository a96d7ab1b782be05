use tracing_futures::Instrument;

use crate::checks::{default_checks, run_check, Check, CheckError};
use crate::config::Settings;
use crate::probe_client::ProbeClient;

/// Result of a single check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: String,
    pub result: Result<(), CheckError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of one run, in the order the checks were given.
#[derive(Debug)]
pub struct Report {
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &CheckError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.result {
                Ok(()) => None,
                Err(err) => Some((outcome.name.as_str(), err)),
            })
    }

    /// Turns a report with any failed check into an error.
    pub fn ensure_success(&self) -> Result<(), anyhow::Error> {
        if self.is_success() {
            Ok(())
        } else {
            anyhow::bail!(
                "{} of {} checks failed",
                self.failed(),
                self.outcomes.len()
            )
        }
    }
}

/// Runs the default checks against the configured target.
pub async fn run(settings: &Settings) -> Result<Report, anyhow::Error> {
    let client = settings.probe_client()?;
    let checks = default_checks(&settings.expectations);
    run_checks(&client, checks).await
}

/// Runs every check as its own task, each with its own request.
/// Only a task that could not be joined makes the run itself fail.
#[tracing::instrument(name = "Running checks", skip_all, fields(target = %client.target(), checks = checks.len()))]
pub async fn run_checks(client: &ProbeClient, checks: Vec<Check>) -> Result<Report, anyhow::Error> {
    let handles: Vec<_> = checks
        .into_iter()
        .map(|check| {
            let client = client.clone();
            let task = async move {
                let result = run_check(&client, &check).await;
                CheckOutcome {
                    name: check.name,
                    result,
                }
            };
            tokio::spawn(task.instrument(tracing::Span::current()))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await?);
    }

    let report = Report { outcomes };
    for (name, err) in report.failures() {
        tracing::error!(check = %name, error.cause_chain = ?err, error.message = %err, "Check failed");
    }
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        "Finished running checks"
    );

    Ok(report)
}
