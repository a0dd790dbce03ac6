//! Current-conditions response mapping.

use serde::Deserialize;

use super::error::{decode, DashboardError, Result};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// A resolved position on earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    name: String,
    sys: Sys,
    main: Main,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Sys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

/// What the weather panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    /// Degrees Celsius, rounded.
    pub temperature: i64,
    pub feels_like: i64,
    pub description: String,
    pub icon: String,
}

impl WeatherReport {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let current: CurrentWeather = decode(value, "weather")?;
        let condition = current
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::Shape("weather: empty conditions list".into()))?;

        Ok(Self {
            city: current.name,
            country: current.sys.country,
            temperature: round_celsius(current.main.temp),
            feels_like: round_celsius(current.main.feels_like),
            description: condition.description,
            icon: condition.icon,
        })
    }

    pub fn headline(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn summary(&self) -> String {
        format!(
            "{}°C, Feels like: {}°C",
            self.temperature, self.feels_like
        )
    }

    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}

/// Rounds halves toward positive infinity, so -3.5 becomes -3.
pub fn round_celsius(t: f64) -> i64 {
    (t + 0.5).floor() as i64
}

/// Position returned by an IP geolocation endpoint.
#[derive(Debug, Deserialize)]
struct LocatedPosition {
    lat: f64,
    lon: f64,
}

pub fn coordinates_from_json(value: serde_json::Value) -> Result<Coordinates> {
    let pos: LocatedPosition = decode(value, "location")?;
    Ok(Coordinates::new(pos.lat, pos.lon))
}
