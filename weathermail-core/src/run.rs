//! The one fetch-format-send cycle a single invocation performs.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::mailer::Mailer;
use crate::model::EmailMessage;
use crate::provider::BriefingProvider;
use crate::report;

/// Run the linear pipeline once: fetch readings, compose the report, send
/// it. Returns the message that was delivered so callers can confirm what
/// went out. Any stage failure aborts the run; there is no partial-send
/// state.
pub async fn run_once(
    config: &Config,
    provider: &dyn BriefingProvider,
    mailer: &dyn Mailer,
) -> Result<EmailMessage> {
    tracing::info!(location = config.location.label, "fetching briefing data");
    let briefing = provider
        .fetch(&config.location)
        .await
        .context("fetching weather and air quality data")?;

    let message = report::compose(&briefing, &config.location);

    tracing::info!(subject = %message.subject, recipient = %config.recipient, "sending briefing");
    mailer
        .send(&message)
        .await
        .with_context(|| format!("sending briefing to {}", config.recipient))?;

    tracing::info!("briefing sent");
    Ok(message)
}
