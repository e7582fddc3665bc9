use clap::Parser;
use weathermail_core::{Config, SmtpMailer, WeatherApiProvider, run};

/// Top-level CLI struct. The tool takes no flags or subcommands; every
/// invocation runs one briefing cycle for the compiled-in location.
#[derive(Debug, Parser)]
#[command(
    name = "weathermail",
    version,
    about = "Fetch a weather & air-quality briefing and email it"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;

        let provider = WeatherApiProvider::new(config.weatherapi_key.clone())?;
        let mailer = SmtpMailer::new(
            &config.smtp_host,
            &config.sender,
            &config.sender_password,
            &config.recipient,
        )?;

        let message = run::run_once(&config, &provider, &mailer).await?;
        println!("Briefing sent to {}: {}", config.recipient, message.subject);

        Ok(())
    }
}
