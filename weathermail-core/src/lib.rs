//! Core library for the `weathermail` briefing tool.
//!
//! This crate defines:
//! - Environment-backed configuration
//! - The WeatherAPI client with bounded retry
//! - Threshold classification for pollutants and UV
//! - Plain-text report rendering
//! - SMTP delivery and the single-run orchestrator
//!
//! It is used by `weathermail-cli`, but can also be reused by other
//! binaries or services.

pub mod classify;
pub mod config;
pub mod error;
pub mod mailer;
pub mod model;
pub mod provider;
pub mod report;
pub mod run;

pub use config::Config;
pub use error::{ConfigError, DeliveryError, FetchError};
pub use mailer::{Mailer, SmtpMailer};
pub use model::{Briefing, EmailMessage, Location};
pub use provider::BriefingProvider;
pub use provider::weatherapi::WeatherApiProvider;
