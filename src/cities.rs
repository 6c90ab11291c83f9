//! Static city table and lookup.

use crate::error::WeatherError;
use crate::models::Coords;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Normalized lookup key (trimmed, lower-case)
    pub key: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn coords(&self) -> Coords {
        Coords {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Supported cities, in the order they are listed to callers.
#[rustfmt::skip]
pub static CITIES: [City; 5] = [
    City { key: "istanbul", name: "İstanbul", lat: 41.0082, lon: 28.9784 },
    City { key: "ankara", name: "Ankara", lat: 39.9334, lon: 32.8597 },
    City { key: "izmir", name: "İzmir", lat: 38.4237, lon: 27.1428 },
    City { key: "bursa", name: "Bursa", lat: 40.1950, lon: 29.0600 },
    City { key: "antalya", name: "Antalya", lat: 36.8969, lon: 30.7133 },
];

/// Resolves free-form input to a supported city.
pub fn resolve(input: &str) -> Result<&'static City, WeatherError> {
    let key = input.trim().to_lowercase();
    CITIES
        .iter()
        .find(|city| city.key == key)
        .ok_or_else(|| WeatherError::UnsupportedCity {
            supported: supported_names(),
        })
}

/// Display names of every supported city, comma separated.
pub fn supported_names() -> String {
    CITIES
        .iter()
        .map(|city| city.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_city_ignoring_case_and_whitespace() {
        let cases = [
            ("Istanbul", "İstanbul", 41.0082, 28.9784),
            ("  ANKARA ", "Ankara", 39.9334, 32.8597),
            ("izmir", "İzmir", 38.4237, 27.1428),
            ("\tBursa\n", "Bursa", 40.1950, 29.0600),
            ("AnTaLyA", "Antalya", 36.8969, 30.7133),
        ];

        for (input, name, lat, lon) in cases {
            let city = resolve(input).expect("city should resolve");
            assert_eq!(city.name, name);
            assert_eq!(city.coords(), Coords { lat, lon });
        }
    }

    #[test]
    fn unsupported_city_lists_all_names_in_order() {
        for input in ["Paris", "", "  ", "istanbul2"] {
            let err = resolve(input).unwrap_err();
            assert!(matches!(err, WeatherError::UnsupportedCity { .. }));
            assert_eq!(
                err.to_string(),
                "Unsupported city. Supported: İstanbul, Ankara, İzmir, Bursa, Antalya"
            );
        }
    }

    #[test]
    fn table_keys_are_normalized() {
        for city in &CITIES {
            assert_eq!(city.key, city.key.trim().to_lowercase());
            assert!((-90.0..=90.0).contains(&city.lat));
            assert!((-180.0..=180.0).contains(&city.lon));
        }
    }
}
