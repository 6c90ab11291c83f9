use anyhow::Result;
use reqwest::{redirect::Policy, Client};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::cities;
use crate::constants::{CURRENT_FIELDS, UPSTREAM_TIMEOUT, USER_AGENT};
use crate::error::WeatherError;
use crate::formatters::format_snapshot;
use crate::models::{Coords, OpenMeteoCurrentResponse, WeatherSnapshot};

/// Gateway to the Open-Meteo forecast API, shared by every request handler
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    base_url: Arc<str>,
}

impl Weather {
    /// Creates a new Weather service against the given API base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, UPSTREAM_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::UpstreamStatus(response.status()));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Fetches current conditions for a coordinate pair
    pub async fn fetch_current(
        &self,
        coords: Coords,
    ) -> Result<OpenMeteoCurrentResponse, WeatherError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&timezone=auto",
            self.base_url, coords.lat, coords.lon, CURRENT_FIELDS
        );
        tracing::debug!("Requesting Open-Meteo: {}", url);

        self.make_request::<OpenMeteoCurrentResponse>(&url).await
    }

    /// Resolves a city name and returns its normalized weather snapshot
    pub async fn current_snapshot(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let city = cities::resolve(city)?;
        tracing::info!("Getting current weather for {}", city.name);

        let response = self.fetch_current(city.coords()).await?;
        Ok(format_snapshot(city, response))
    }
}
