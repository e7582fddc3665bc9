//! Pure threshold tables mapping numeric readings to qualitative bands.
//!
//! The PM2.5 table follows the CPCB guidance bands used in India, which is
//! where the deployment location sits. WeatherAPI also ships a US-EPA
//! composite index in its payload; that index is reported verbatim in the
//! report but deliberately not merged into this table, since the two
//! schemes disagree on both band counts and breakpoints.

/// CPCB-style guidance band for a PM2.5 concentration in µg/m³.
/// Upper bounds are inclusive: 30.0 is still Good, 30.01 is Satisfactory.
pub fn pm25_category(pm25_ug_m3: f64) -> &'static str {
    if pm25_ug_m3 <= 30.0 {
        "Good"
    } else if pm25_ug_m3 <= 60.0 {
        "Satisfactory"
    } else if pm25_ug_m3 <= 90.0 {
        "Moderate"
    } else if pm25_ug_m3 <= 120.0 {
        "Poor"
    } else if pm25_ug_m3 <= 250.0 {
        "Very Poor"
    } else {
        "Severe"
    }
}

/// UV band plus the advisory that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvAdvice {
    pub category: &'static str,
    pub note: &'static str,
}

/// WHO UV index bands. A missing reading maps to an explicit Unknown
/// band, never to a numeric default.
pub fn uv_category(uv: Option<f64>) -> UvAdvice {
    let Some(uv) = uv else {
        return UvAdvice { category: "Unknown", note: "no UV data" };
    };

    if uv < 3.0 {
        UvAdvice { category: "Low", note: "Minimal risk" }
    } else if uv < 6.0 {
        UvAdvice { category: "Moderate", note: "Use sunglasses; SPF 30+ if outdoors" }
    } else if uv < 8.0 {
        UvAdvice { category: "High", note: "SPF 30+, hat, seek shade at midday" }
    } else if uv < 11.0 {
        UvAdvice { category: "Very High", note: "Reduce time in sun between 10:00 and 16:00" }
    } else {
        UvAdvice { category: "Extreme", note: "Avoid midday sun; SPF 50+" }
    }
}

/// Advisory flags for the bottom of the report, in fixed priority order:
/// pollution severity, then UV, then visibility. Total over missing
/// values; when nothing triggers, exactly one all-clear message comes
/// back.
pub fn concerning_flags(
    pm25_ug_m3: Option<f64>,
    uv: Option<f64>,
    visibility_km: Option<f64>,
) -> Vec<&'static str> {
    let mut flags = Vec::new();

    if let Some(pm25) = pm25_ug_m3 {
        if pm25 > 250.0 {
            flags.push(
                "PM2.5 is in the Severe range: avoid outdoor exertion; wear an N95 mask if stepping out.",
            );
        } else if pm25 > 120.0 {
            flags.push("PM2.5 is Very Poor: limit outdoor time; consider a mask.");
        } else if pm25 > 90.0 {
            flags.push("PM2.5 is Moderate/Poor: sensitive groups may feel symptoms.");
        }
    }

    if let Some(uv) = uv
        && uv >= 6.0
    {
        flags.push("UV is High or above around midday: SPF 30+, hat, seek shade.");
    }

    if let Some(vis) = visibility_km
        && vis <= 2.0
    {
        flags.push("Low visibility: take extra care when commuting this morning.");
    }

    if flags.is_empty() {
        flags.push("No major flags this morning. Stay hydrated and have a great day!");
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_rank(band: &str) -> usize {
        ["Good", "Satisfactory", "Moderate", "Poor", "Very Poor", "Severe"]
            .iter()
            .position(|b| *b == band)
            .unwrap_or_else(|| panic!("unexpected band {band}"))
    }

    #[test]
    fn pm25_bands_are_monotonic() {
        let samples =
            [0.0, 15.0, 30.0, 30.01, 45.0, 60.0, 75.0, 90.0, 100.0, 120.0, 200.0, 250.0, 400.0];

        let mut prev = 0;
        for v in samples {
            let rank = band_rank(pm25_category(v));
            assert!(rank >= prev, "severity dropped at {v}");
            prev = rank;
        }
    }

    #[test]
    fn pm25_upper_bounds_are_inclusive() {
        assert_eq!(pm25_category(30.0), "Good");
        assert_eq!(pm25_category(30.01), "Satisfactory");
        assert_eq!(pm25_category(60.0), "Satisfactory");
        assert_eq!(pm25_category(90.0), "Moderate");
        assert_eq!(pm25_category(120.0), "Poor");
        assert_eq!(pm25_category(250.0), "Very Poor");
        assert_eq!(pm25_category(250.01), "Severe");
    }

    #[test]
    fn uv_breakpoints() {
        assert_eq!(uv_category(Some(0.0)).category, "Low");
        assert_eq!(uv_category(Some(2.9)).category, "Low");
        assert_eq!(uv_category(Some(3.0)).category, "Moderate");
        assert_eq!(uv_category(Some(6.0)).category, "High");
        assert_eq!(uv_category(Some(8.0)).category, "Very High");
        assert_eq!(uv_category(Some(11.0)).category, "Extreme");
    }

    #[test]
    fn missing_uv_is_unknown() {
        let advice = uv_category(None);
        assert_eq!(advice.category, "Unknown");
        assert!(!advice.note.is_empty());
    }

    #[test]
    fn quiet_morning_yields_exactly_one_default_flag() {
        let flags = concerning_flags(Some(90.0), Some(5.9), Some(10.0));
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("No major flags"));
    }

    #[test]
    fn all_missing_values_still_yield_the_default() {
        let flags = concerning_flags(None, None, None);
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("No major flags"));
    }

    #[test]
    fn flags_come_out_in_priority_order() {
        let flags = concerning_flags(Some(300.0), Some(9.0), Some(1.5));
        assert_eq!(flags.len(), 3);
        assert!(flags[0].contains("Severe"));
        assert!(flags[1].contains("UV"));
        assert!(flags[2].contains("visibility"));
    }

    #[test]
    fn only_the_worst_pm25_flag_fires() {
        let flags = concerning_flags(Some(130.0), None, None);
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("Very Poor"));
    }
}
