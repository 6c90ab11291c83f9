//! HTTP surface: the browser page, the weather API and a liveness probe.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::error::WeatherError;
use crate::models::{HealthResponse, WeatherQuery, WeatherSnapshot};
use crate::service::Weather;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn router(weather: Weather) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/weather", get(api_weather))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(weather)
}

/// GET /, a static page that calls the weather API from the browser.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/weather?city=<name>
async fn api_weather(
    State(weather): State<Weather>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherSnapshot>, WeatherError> {
    let Query(query) = query?;
    let city = query.city.ok_or(WeatherError::MissingCity)?;
    let snapshot = weather.current_snapshot(&city).await?;
    Ok(Json(snapshot))
}

/// GET /health. No dependencies are checked.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
