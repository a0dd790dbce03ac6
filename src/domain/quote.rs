//! Global quote response mapping.

use serde_json::{Map, Value};
use thousands::Separable;

use super::error::{DashboardError, Result};

const GLOBAL_QUOTE: &str = "Global Quote";
const SYMBOL: &str = "01. symbol";
const PRICE: &str = "05. price";
const CHANGE_PERCENT: &str = "10. change percent";
const CHANGE_PERCENT_ALIAS: &str = "change percent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// What the stock panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuote {
    pub symbol: String,
    pub price: String,
    pub change_percent: String,
}

impl StockQuote {
    pub fn from_json(value: Value) -> Result<Self> {
        let quote = value
            .get(GLOBAL_QUOTE)
            .and_then(Value::as_object)
            .ok_or_else(|| DashboardError::Shape(format!("missing \"{GLOBAL_QUOTE}\"")))?;
        if quote.is_empty() {
            return Err(DashboardError::Shape(format!(
                "\"{GLOBAL_QUOTE}\" is empty"
            )));
        }

        Ok(Self {
            symbol: field(quote, SYMBOL)?,
            price: field(quote, PRICE)?,
            change_percent: field(quote, CHANGE_PERCENT)
                .or_else(|_| field(quote, CHANGE_PERCENT_ALIAS))?,
        })
    }

    /// Price with two decimals and thousands separators; raw text if unparsable.
    pub fn display_price(&self) -> String {
        match self.price.trim().parse::<f64>() {
            Ok(p) => format!("{p:.2}").separate_with_commas(),
            Err(_) => self.price.clone(),
        }
    }

    pub fn trend(&self) -> Trend {
        let change = self.change_percent.trim().trim_end_matches('%');
        match change.parse::<f64>() {
            Ok(c) if c > 0.0 => Trend::Up,
            Ok(c) if c < 0.0 => Trend::Down,
            _ => Trend::Flat,
        }
    }
}

fn field(quote: &Map<String, Value>, key: &str) -> Result<String> {
    quote
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| DashboardError::Shape(format!("missing \"{GLOBAL_QUOTE}\".\"{key}\"")))
}
