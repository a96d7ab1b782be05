#![forbid(unsafe_code)]

pub mod checks;
pub mod config;
pub mod domain;
pub mod probe_client;
pub mod runner;
pub mod telemetry;
mod utils;
