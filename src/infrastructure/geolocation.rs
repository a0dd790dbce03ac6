//! Resolves where the weather should be looked up.

use reqwest::Url;
use thiserror::Error;

use crate::{
    domain::{
        weather::{coordinates_from_json, Coordinates},
        widget::{LOCATION_FAILED, LOCATION_UNSUPPORTED},
        DashboardError,
    },
    infrastructure::{config::WeatherConfig, http::JsonFetcher},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("no coordinates configured and no geolocation endpoint")]
    Unsupported,

    #[error("location lookup failed: {0}")]
    Lookup(DashboardError),
}

impl LocationError {
    /// Inline message for the weather panel.
    pub fn message(&self) -> &'static str {
        match self {
            LocationError::Unsupported => LOCATION_UNSUPPORTED,
            LocationError::Lookup(_) => LOCATION_FAILED,
        }
    }
}

/// Fixed coordinates win; otherwise ask the configured lookup endpoint.
pub async fn resolve(
    config: &WeatherConfig,
    fetcher: &dyn JsonFetcher,
) -> Result<Coordinates, LocationError> {
    if let Some(at) = config.fixed_coordinates() {
        return Ok(at);
    }

    let Some(endpoint) = config
        .geolocation_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
    else {
        return Err(LocationError::Unsupported);
    };

    let url = Url::parse(endpoint).map_err(|e| {
        LocationError::Lookup(DashboardError::Network(format!(
            "invalid geolocation endpoint: {e}"
        )))
    })?;
    let value = fetcher.get_json(url).await.map_err(LocationError::Lookup)?;
    coordinates_from_json(value).map_err(LocationError::Lookup)
}
