use thiserror::Error;

/// Missing or invalid settings. Fatal, never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
}

/// Failure while talking to a data provider.
///
/// Only the `Status` case with a 500/502/503/504 status is ever retried,
/// and only up to the bounded attempt limit; everything else is fatal on
/// first occurrence.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to send request to {provider}: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status} after {attempts} attempt(s): {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        attempts: u32,
        body: String,
    },

    #[error("failed to parse {provider} JSON: {source}")]
    Json {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} response is missing `{field}`")]
    MissingField {
        provider: &'static str,
        field: &'static str,
    },
}

/// SMTP delivery failure. Single attempt, no retry; the run aborts.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build MIME message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
