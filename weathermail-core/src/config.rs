use crate::error::ConfigError;
use crate::model::Location;

/// Where the briefing is anchored. Compiled in per deployment.
pub const LOCATION: Location = Location {
    label: "Gurugram - Candor TechSpace (Subhash Chowk)",
    latitude: 28.4595,
    longitude: 77.0266,
};

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Everything one run needs, resolved once at startup and passed by
/// parameter into each component.
#[derive(Debug, Clone)]
pub struct Config {
    /// WeatherAPI.com key.
    pub weatherapi_key: String,
    /// Sender address, also the SMTP username.
    pub sender: String,
    /// App password for the sender account.
    pub sender_password: String,
    /// Single recipient address.
    pub recipient: String,
    pub smtp_host: String,
    pub location: Location,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through `lookup`, collecting every missing or
    /// empty required name into a single error so the operator sees the
    /// full list at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| -> String {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        let weatherapi_key = require("WEATHERAPI_KEY");
        let sender = require("EMAIL");
        let sender_password = require("EMAIL_PASS");
        let recipient = require("RECIPIENT");

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let smtp_host = lookup("SMTP_HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());

        Ok(Self {
            weatherapi_key,
            sender,
            sender_password,
            recipient,
            smtp_host,
            location: LOCATION,
        })
    }
}
