use serde::{Deserialize, Serialize};
use serde_json::Number;

// ============================================================================
// Open-Meteo API Models
// ============================================================================

/// Body of a `/forecast?current=...` call. Everything is optional: a missing
/// `current` block or field becomes `None`, a wrongly typed one fails to parse.
#[derive(Debug, Default, Deserialize)]
pub struct OpenMeteoCurrentResponse {
    pub current: Option<CurrentData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentData {
    pub time: Option<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Option<Number>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
}

// ============================================================================
// Gateway API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

/// Normalized weather payload returned by `/api/weather`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub city: &'static str,
    pub coords: Coords,
    pub time: Option<String>,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub humidity_percent: Option<Number>,
    pub wind_kmh: Option<f64>,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_block_tolerates_null_and_missing_fields() {
        let parsed: OpenMeteoCurrentResponse = serde_json::from_value(json!({
            "latitude": 41.0,
            "current": { "time": "2024-05-01T12:00", "temperature_2m": null }
        }))
        .unwrap();

        let current = parsed.current.unwrap();
        assert_eq!(current.time.as_deref(), Some("2024-05-01T12:00"));
        assert_eq!(current.temperature, None);
        assert_eq!(current.relative_humidity, None);
    }

    #[test]
    fn null_current_is_treated_as_missing() {
        let parsed: OpenMeteoCurrentResponse =
            serde_json::from_value(json!({ "current": null })).unwrap();
        assert!(parsed.current.is_none());
    }

    #[test]
    fn humidity_keeps_its_numeric_form() {
        let parsed: OpenMeteoCurrentResponse = serde_json::from_value(json!({
            "current": { "relative_humidity_2m": 55.0 }
        }))
        .unwrap();
        let humidity = parsed.current.unwrap().relative_humidity.unwrap();
        assert_eq!(humidity.as_f64(), Some(55.0));
        assert_eq!(serde_json::to_value(&humidity).unwrap(), json!(55.0));

        let parsed: OpenMeteoCurrentResponse = serde_json::from_value(json!({
            "current": { "relative_humidity_2m": 55 }
        }))
        .unwrap();
        let humidity = parsed.current.unwrap().relative_humidity.unwrap();
        assert_eq!(serde_json::to_value(&humidity).unwrap(), json!(55));
    }

    #[test]
    fn wrongly_typed_current_is_rejected() {
        let err = serde_json::from_value::<OpenMeteoCurrentResponse>(json!({ "current": "n/a" }));
        assert!(err.is_err());

        let err = serde_json::from_value::<OpenMeteoCurrentResponse>(json!({
            "current": { "temperature_2m": "warm" }
        }));
        assert!(err.is_err());
    }
}
