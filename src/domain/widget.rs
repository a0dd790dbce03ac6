//! Identity of the HTTP-backed panels and the requests issued for them.

use strum::Display;

use super::{image::ImageView, quote::StockQuote, weather::WeatherReport};

pub const WEATHER_FALLBACK: &str = "Could not load weather data.";
pub const IMAGE_FALLBACK: &str = "Could not load image.";
pub const STOCK_FALLBACK: &str = "Could not load stock data.";
pub const LOCATION_FAILED: &str = "Could not get location.";
pub const LOCATION_UNSUPPORTED: &str = "Geolocation is not supported.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WidgetKind {
    #[strum(to_string = "weather")]
    Weather,
    #[strum(to_string = "image")]
    Image,
    #[strum(to_string = "stock")]
    Stock,
}

impl WidgetKind {
    /// Inline message shown when a request for this panel fails.
    pub fn fallback(&self) -> &'static str {
        match self {
            WidgetKind::Weather => WEATHER_FALLBACK,
            WidgetKind::Image => IMAGE_FALLBACK,
            WidgetKind::Stock => STOCK_FALLBACK,
        }
    }
}

/// Tags a request so that only the latest one for a panel may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId {
    pub widget: WidgetKind,
    pub seq: u64,
}

impl RequestId {
    pub fn new(widget: WidgetKind, seq: u64) -> Self {
        Self { widget, seq }
    }
}

/// A successfully mapped response.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetPayload {
    Weather(WeatherReport),
    Image(ImageView),
    Quote(StockQuote),
}

impl WidgetPayload {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetPayload::Weather(_) => WidgetKind::Weather,
            WidgetPayload::Image(_) => WidgetKind::Image,
            WidgetPayload::Quote(_) => WidgetKind::Stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fallback_messages() {
        assert_eq!(WidgetKind::Weather.fallback(), "Could not load weather data.");
        assert_eq!(WidgetKind::Image.fallback(), "Could not load image.");
        assert_eq!(WidgetKind::Stock.fallback(), "Could not load stock data.");
    }

    #[test]
    fn test_payload_kind() {
        let quote = StockQuote {
            symbol: "IBM".into(),
            price: "1.00".into(),
            change_percent: "0%".into(),
        };
        assert_eq!(WidgetPayload::Quote(quote).kind(), WidgetKind::Stock);
        assert_eq!(WidgetKind::Weather.to_string(), "weather");
    }
}
