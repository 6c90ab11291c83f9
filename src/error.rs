//! Gateway error types and their HTTP mapping.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Missing required query parameter: city")]
    MissingCity,

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Unsupported city. Supported: {supported}")]
    UnsupportedCity { supported: String },

    #[error("Weather provider did not respond in time")]
    UpstreamTimeout,

    #[error("Weather provider request failed: {0}")]
    UpstreamRequest(#[source] reqwest::Error),

    #[error("Weather provider returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Weather provider returned a malformed body: {0}")]
    MalformedBody(#[source] reqwest::Error),
}

impl WeatherError {
    /// HTTP status reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnsupportedCity { .. } | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamRequest(_) | Self::UpstreamStatus(_) | Self::MalformedBody(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Whether the caller sent something we can never serve.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCity | Self::UnsupportedCity { .. } | Self::InvalidQuery(_)
        )
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else if err.is_decode() {
            Self::MalformedBody(err)
        } else {
            Self::UpstreamRequest(err)
        }
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.is_client_error() {
            tracing::debug!("Rejected weather request: {}", self);
        } else {
            tracing::error!("Upstream failure ({}): {}", status, self);
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
