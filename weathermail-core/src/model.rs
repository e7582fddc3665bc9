use chrono::NaiveDateTime;

/// Fixed deployment location. Compiled in, never read at runtime.
#[derive(Debug, Clone)]
pub struct Location {
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Coordinate pair in the `lat,lon` form provider query strings expect.
    pub fn coordinates(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    No2,
    So2,
    O3,
}

impl Pollutant {
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::O3 => "O3",
        }
    }

    /// Molar mass in g/mol for gases; particulates have none (they are
    /// only ever reported by mass).
    fn molar_mass_g_mol(&self) -> Option<f64> {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => None,
            Pollutant::Co => Some(28.01),
            Pollutant::No2 => Some(46.01),
            Pollutant::So2 => Some(64.07),
            Pollutant::O3 => Some(48.00),
        }
    }
}

/// Unit a provider reported a concentration in. Providers disagree here,
/// so readings carry their unit instead of assuming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcentrationUnit {
    MicrogramsPerCubicMeter,
    PartsPerBillion,
}

/// A pollutant concentration tagged with its source unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concentration {
    pub value: f64,
    pub unit: ConcentrationUnit,
}

impl Concentration {
    pub fn ug_m3(value: f64) -> Self {
        Self { value, unit: ConcentrationUnit::MicrogramsPerCubicMeter }
    }

    pub fn ppb(value: f64) -> Self {
        Self { value, unit: ConcentrationUnit::PartsPerBillion }
    }

    /// Normalized value in µg/m³, the unit every threshold table and
    /// report line uses. ppb gas readings are converted via molar mass at
    /// 25°C (24.45 L/mol); a ppb-tagged particulate value passes through
    /// unchanged since no meaningful conversion exists.
    pub fn as_ug_m3(&self, pollutant: Pollutant) -> f64 {
        match self.unit {
            ConcentrationUnit::MicrogramsPerCubicMeter => self.value,
            ConcentrationUnit::PartsPerBillion => match pollutant.molar_mass_g_mol() {
                Some(molar_mass) => self.value * molar_mass / 24.45,
                None => self.value,
            },
        }
    }
}

/// Current conditions for the location. Sunrise/sunset come back from the
/// provider as preformatted local-time strings and are kept as-is.
#[derive(Debug, Clone)]
pub struct WeatherReading {
    pub condition: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub cloud_cover_pct: u8,
    pub visibility_km: Option<f64>,
    pub precip_mm: f64,
    pub chance_of_rain_pct: Option<u8>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AirQualityReading {
    pub pm2_5: Option<Concentration>,
    pub pm10: Option<Concentration>,
    pub co: Option<Concentration>,
    pub no2: Option<Concentration>,
    pub so2: Option<Concentration>,
    pub o3: Option<Concentration>,
    /// Provider-computed 1..=6 composite index, when present.
    pub us_epa_index: Option<u8>,
}

/// UV index, or an explicit data-unavailable state. A missing value is
/// surfaced as such, never substituted with a plausible-looking number.
#[derive(Debug, Clone, Copy, Default)]
pub struct UvReading {
    pub index: Option<f64>,
}

/// Everything one invocation fetched. Rebuilt from scratch every run.
#[derive(Debug, Clone)]
pub struct Briefing {
    pub weather: WeatherReading,
    pub air_quality: AirQualityReading,
    pub uv: UvReading,
    /// Local wall-clock time at the location, as reported by the provider.
    pub local_time: Option<NaiveDateTime>,
}

/// A composed, ready-to-send message. Transient, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}
