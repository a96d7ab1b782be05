use anyhow::Context;
use config::{Config, ConfigError, Environment, File};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

use crate::domain::{TargetUrl, TargetUrlParseError};
use crate::probe_client::ProbeClient;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub target: TargetSettings,
    pub expectations: ExpectationSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TargetSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ExpectationSettings {
    pub body: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub length: usize,
}

/// Layers defaults, an optional `config` file and `APP_*` environment variables.
pub fn settings() -> Result<Settings, ConfigError> {
    let mut settings = Config::default();
    settings.set_default("target.base_url", "http://localhost:4555")?;
    settings.set_default("target.timeout_milliseconds", 2000)?;
    settings.set_default("expectations.body", "working fine")?;
    settings.set_default("expectations.length", 12)?;

    settings.merge(File::with_name("config").required(false))?;
    // e.g. `APP_TARGET__BASE_URL=http://127.0.0.1:8080`
    settings.merge(Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}

impl TargetSettings {
    pub fn url(&self) -> Result<TargetUrl, TargetUrlParseError> {
        TargetUrl::parse(&self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

impl Settings {
    pub fn probe_client(&self) -> Result<ProbeClient, anyhow::Error> {
        let target = self
            .target
            .url()
            .with_context(|| format!("Invalid target URL `{}`", self.target.base_url))?;
        let client =
            ProbeClient::new(target, self.target.timeout()).context("Failed to build HTTP client")?;
        Ok(client)
    }
}
