use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::error::FetchError;
use crate::model::{
    AirQualityReading, Briefing, Concentration, Location, UvReading, WeatherReading,
};
use crate::provider::{BriefingProvider, MAX_ATTEMPTS, REQUEST_TIMEOUT, backoff_delay, is_retryable};

const PROVIDER: &str = "weatherapi";
const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

/// WeatherAPI.com client. One combined `forecast.json` call returns the
/// current conditions, the day forecast, astro data, and air quality.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Same client, pointed at a different host. Used by tests to talk to
    /// a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| FetchError::Transport { provider: PROVIDER, source })?;

        Ok(Self { api_key, base_url, http })
    }

    async fn get_forecast(&self, location: &Location) -> Result<ForecastResponse, FetchError> {
        let url = format!("{}/v1/forecast.json", self.base_url);
        let coordinates = location.coordinates();

        let mut attempt = 0;
        loop {
            attempt += 1;

            let res = self
                .http
                .get(&url)
                .query(&[
                    ("key", self.api_key.as_str()),
                    ("q", coordinates.as_str()),
                    ("days", "1"),
                    ("aqi", "yes"),
                    ("alerts", "no"),
                ])
                .send()
                .await
                .map_err(|source| FetchError::Transport { provider: PROVIDER, source })?;

            let status = res.status();
            if status.is_success() {
                let body = res
                    .text()
                    .await
                    .map_err(|source| FetchError::Transport { provider: PROVIDER, source })?;

                return serde_json::from_str(&body)
                    .map_err(|source| FetchError::Json { provider: PROVIDER, source });
            }

            if is_retryable(status) && attempt < MAX_ATTEMPTS {
                let delay = backoff_delay(attempt);
                tracing::warn!(%status, attempt, ?delay, "transient weatherapi failure, retrying");
                tokio::time::sleep(delay).await;
                continue;
            }

            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                provider: PROVIDER,
                status,
                attempts: attempt,
                body: truncate_body(&body),
            });
        }
    }
}

#[async_trait]
impl BriefingProvider for WeatherApiProvider {
    async fn fetch(&self, location: &Location) -> Result<Briefing, FetchError> {
        let response = self.get_forecast(location).await?;
        briefing_from_response(response)
    }
}

fn briefing_from_response(response: ForecastResponse) -> Result<Briefing, FetchError> {
    let today = response
        .forecast
        .forecastday
        .into_iter()
        .next()
        .ok_or(FetchError::MissingField { provider: PROVIDER, field: "forecast.forecastday[0]" })?;

    let current = response.current;

    let weather = WeatherReading {
        condition: current.condition.text,
        temp_c: current.temp_c,
        temp_f: current.temp_f,
        feels_like_c: current.feelslike_c,
        humidity_pct: current.humidity,
        wind_kph: current.wind_kph,
        cloud_cover_pct: current.cloud,
        visibility_km: current.vis_km,
        precip_mm: current.precip_mm.unwrap_or(0.0),
        chance_of_rain_pct: today.day.daily_chance_of_rain,
        sunrise: today.astro.sunrise,
        sunset: today.astro.sunset,
    };

    // WeatherAPI documents all pollutant concentrations as µg/m³.
    let air_quality = current
        .air_quality
        .map(|aq| AirQualityReading {
            pm2_5: aq.pm2_5.map(Concentration::ug_m3),
            pm10: aq.pm10.map(Concentration::ug_m3),
            co: aq.co.map(Concentration::ug_m3),
            no2: aq.no2.map(Concentration::ug_m3),
            so2: aq.so2.map(Concentration::ug_m3),
            o3: aq.o3.map(Concentration::ug_m3),
            us_epa_index: aq.us_epa_index,
        })
        .unwrap_or_default();

    let local_time = response
        .location
        .localtime
        .as_deref()
        .and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok());

    Ok(Briefing {
        weather,
        air_quality,
        uv: UvReading { index: current.uv },
        local_time,
    })
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    localtime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    condition: ApiCondition,
    temp_c: f64,
    temp_f: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    cloud: u8,
    vis_km: Option<f64>,
    precip_mm: Option<f64>,
    uv: Option<f64>,
    air_quality: Option<ApiAirQuality>,
}

#[derive(Debug, Deserialize)]
struct ApiAirQuality {
    pm2_5: Option<f64>,
    pm10: Option<f64>,
    co: Option<f64>,
    no2: Option<f64>,
    so2: Option<f64>,
    o3: Option<f64>,
    #[serde(rename = "us-epa-index")]
    us_epa_index: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ApiAstro {
    sunrise: Option<String>,
    sunset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    daily_chance_of_rain: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    astro: ApiAstro,
    day: ApiDay,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
