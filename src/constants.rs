use std::time::Duration;

/// User agent string for upstream HTTP requests
pub const USER_AGENT: &str = "stateless-weather/0.1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Fields requested from the Open-Meteo `current` block
pub const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m";

/// Upper bound for a single upstream request
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider identifier attached to every snapshot
pub const SOURCE: &str = "open-meteo.com";
