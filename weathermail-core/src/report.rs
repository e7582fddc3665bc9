//! Plain-text report rendering.
//!
//! Section order is fixed: Weather, Air Quality, UV Index, Concerning
//! Parameters. Every field has a fixed label and unit suffix; absent
//! values render as `N/A` or drop their line entirely, they never abort
//! composition.

use chrono::{NaiveDateTime, Utc};

use crate::classify::{concerning_flags, pm25_category, uv_category};
use crate::model::{AirQualityReading, Briefing, Concentration, EmailMessage, Location, Pollutant};

/// Compose the subject and body for one briefing.
pub fn compose(briefing: &Briefing, location: &Location) -> EmailMessage {
    // Provider-reported local time; wall clock of this process otherwise.
    let local = briefing.local_time.unwrap_or_else(|| Utc::now().naive_utc());

    EmailMessage {
        subject: subject_line(location, local),
        body: render_body(briefing, location, local),
    }
}

fn subject_line(location: &Location, local: NaiveDateTime) -> String {
    format!("Weather & AQI Update • {} • {}", location.label, local.format("%d %b %Y"))
}

fn render_body(briefing: &Briefing, location: &Location, local: NaiveDateTime) -> String {
    let weather = &briefing.weather;
    let aq = &briefing.air_quality;

    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "As of {} in {}, here are your updates:",
        local.format("%d %B %Y, %I:%M %p"),
        location.label
    ));
    lines.push(String::new());

    lines.push("🌤️ Weather".to_string());
    lines.push(format!("Condition: {}", weather.condition));
    lines.push(format!("Temperature: {:.1}°C (≈ {:.1}°F)", weather.temp_c, weather.temp_f));
    lines.push(format!("Feels Like: {:.1}°C", weather.feels_like_c));
    lines.push(format!("Humidity: {}%", weather.humidity_pct));
    lines.push(format!("Wind: {:.1} km/h", weather.wind_kph));
    lines.push(format!("Cloud Cover: {}%", weather.cloud_cover_pct));
    if let Some(chance) = weather.chance_of_rain_pct {
        lines.push(format!("Chance of Rain (today): {chance}%"));
    }
    lines.push(format!("Precipitation (current): {:.1} mm", weather.precip_mm));
    lines.push(format!("Visibility: {}", fmt_km(weather.visibility_km)));
    lines.push(format!("Sunrise: {}", weather.sunrise.as_deref().unwrap_or("N/A")));
    lines.push(format!("Sunset: {}", weather.sunset.as_deref().unwrap_or("N/A")));
    lines.push(String::new());

    lines.push("🌫️ Air Quality".to_string());
    if let Some(pm25) = aq.pm2_5 {
        let ug = pm25.as_ug_m3(Pollutant::Pm25);
        lines.push(format!("PM2.5: {:.1} µg/m³ - {}", ug, pm25_category(ug)));
    }
    if let Some(pm10) = aq.pm10 {
        lines.push(format!("PM10: {:.1} µg/m³", pm10.as_ug_m3(Pollutant::Pm10)));
    }
    if let Some(idx) = aq.us_epa_index {
        lines.push(format!("US-EPA Index: {idx} (1 = Good, 6 = Hazardous)"));
    }
    for (pollutant, reading) in gas_lines(aq) {
        if let Some(c) = reading {
            lines.push(format!("{}: {:.1} µg/m³", pollutant.label(), c.as_ug_m3(pollutant)));
        }
    }
    lines.push(String::new());

    lines.push("🌞 UV Index".to_string());
    let advice = uv_category(briefing.uv.index);
    let uv_value =
        briefing.uv.index.map_or_else(|| "N/A".to_string(), |v| format!("{v}"));
    lines.push(format!("UV: {} - {} ({})", uv_value, advice.category, advice.note));
    lines.push(String::new());

    lines.push("⚠️ Concerning Parameters".to_string());
    let pm25_ug = aq.pm2_5.map(|c| c.as_ug_m3(Pollutant::Pm25));
    for flag in concerning_flags(pm25_ug, briefing.uv.index, weather.visibility_km) {
        lines.push(format!("• {flag}"));
    }

    lines.join("\n")
}

fn gas_lines(aq: &AirQualityReading) -> [(Pollutant, Option<Concentration>); 4] {
    [
        (Pollutant::Co, aq.co),
        (Pollutant::No2, aq.no2),
        (Pollutant::So2, aq.so2),
        (Pollutant::O3, aq.o3),
    ]
}

fn fmt_km(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |km| format!("{km:.1} km"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UvReading, WeatherReading};
    use chrono::NaiveDate;

    fn synthetic_briefing() -> Briefing {
        Briefing {
            weather: WeatherReading {
                condition: "Partly cloudy".to_string(),
                temp_c: 25.0,
                temp_f: 77.0,
                feels_like_c: 26.4,
                humidity_pct: 60,
                wind_kph: 14.0,
                cloud_cover_pct: 25,
                visibility_km: Some(5.0),
                precip_mm: 0.0,
                chance_of_rain_pct: Some(40),
                sunrise: Some("05:57 AM".to_string()),
                sunset: Some("06:42 PM".to_string()),
            },
            air_quality: AirQualityReading {
                pm2_5: Some(Concentration::ug_m3(35.0)),
                pm10: Some(Concentration::ug_m3(80.0)),
                co: Some(Concentration::ug_m3(310.0)),
                no2: Some(Concentration::ug_m3(20.0)),
                so2: Some(Concentration::ug_m3(8.0)),
                o3: Some(Concentration::ug_m3(30.0)),
                us_epa_index: Some(2),
            },
            uv: UvReading { index: Some(7.0) },
            local_time: NaiveDate::from_ymd_opt(2026, 8, 29)
                .and_then(|d| d.and_hms_opt(7, 30, 0)),
        }
    }

    fn test_location() -> Location {
        Location { label: "Test Bench", latitude: 28.4595, longitude: 77.0266 }
    }

    #[test]
    fn body_contains_expected_labeled_lines() {
        let msg = compose(&synthetic_briefing(), &test_location());

        for line in [
            "Condition: Partly cloudy",
            "Temperature: 25.0°C (≈ 77.0°F)",
            "Feels Like: 26.4°C",
            "Humidity: 60%",
            "Wind: 14.0 km/h",
            "Cloud Cover: 25%",
            "Chance of Rain (today): 40%",
            "Precipitation (current): 0.0 mm",
            "Visibility: 5.0 km",
            "Sunrise: 05:57 AM",
            "Sunset: 06:42 PM",
            "PM2.5: 35.0 µg/m³ - Satisfactory",
            "PM10: 80.0 µg/m³",
            "US-EPA Index: 2 (1 = Good, 6 = Hazardous)",
            "UV: 7 - High (SPF 30+, hat, seek shade at midday)",
            "• UV is High or above around midday: SPF 30+, hat, seek shade.",
        ] {
            assert!(msg.body.lines().any(|l| l == line), "missing line: {line}\n{}", msg.body);
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let msg = compose(&synthetic_briefing(), &test_location());

        let idx = |header: &str| {
            msg.body.find(header).unwrap_or_else(|| panic!("missing header {header}"))
        };
        let weather = idx("🌤️ Weather");
        let air = idx("🌫️ Air Quality");
        let uv = idx("🌞 UV Index");
        let concerning = idx("⚠️ Concerning Parameters");

        assert!(weather < air && air < uv && uv < concerning);
    }

    #[test]
    fn subject_carries_location_and_date() {
        let msg = compose(&synthetic_briefing(), &test_location());
        assert_eq!(msg.subject, "Weather & AQI Update • Test Bench • 29 Aug 2026");
    }

    #[test]
    fn absent_fields_render_as_placeholders_or_drop_out() {
        let mut briefing = synthetic_briefing();
        briefing.weather.visibility_km = None;
        briefing.weather.sunrise = None;
        briefing.weather.chance_of_rain_pct = None;
        briefing.air_quality = AirQualityReading::default();
        briefing.uv = UvReading::default();

        let msg = compose(&briefing, &test_location());

        assert!(msg.body.contains("Visibility: N/A"));
        assert!(msg.body.contains("Sunrise: N/A"));
        assert!(!msg.body.contains("Chance of Rain"));
        assert!(!msg.body.contains("PM2.5:"));
        assert!(msg.body.contains("UV: N/A - Unknown (no UV data)"));
        // No data at all still means a reassuring default flag.
        assert!(msg.body.contains("• No major flags this morning."));
    }
}
