use crate::cities::City;
use crate::constants::SOURCE;
use crate::models::{CurrentData, OpenMeteoCurrentResponse, WeatherSnapshot};

/// Builds the gateway snapshot from an Open-Meteo `current` response.
/// Fields the provider left out come through as `None`.
pub fn format_snapshot(
    city: &'static City,
    response: OpenMeteoCurrentResponse,
) -> WeatherSnapshot {
    let current = response.current.unwrap_or_default();
    let CurrentData {
        time,
        temperature,
        apparent_temperature,
        relative_humidity,
        wind_speed,
    } = current;

    WeatherSnapshot {
        city: city.name,
        coords: city.coords(),
        time,
        temperature_c: temperature,
        feels_like_c: apparent_temperature,
        humidity_percent: relative_humidity,
        wind_kmh: wind_speed,
        source: SOURCE,
    }
}
