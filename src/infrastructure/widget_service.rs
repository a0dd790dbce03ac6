use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex},
};

use reqwest::Url;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::{
        image::{photos_from_json, pick_photo, ImageSize},
        quote::StockQuote,
        weather::{Coordinates, WeatherReport},
        DashboardError, RequestId, WidgetKind, WidgetPayload,
    },
    infrastructure::{
        config::{ApiKey, Config, ImageConfig, StockConfig, WeatherConfig},
        geolocation,
        http::JsonFetcher,
    },
};

/// Why a widget request produced no view: the inline message and the cause.
#[derive(Debug)]
struct Failure {
    message: &'static str,
    cause: String,
}

impl Failure {
    fn new(widget: WidgetKind, error: DashboardError) -> Self {
        Self {
            message: widget.fallback(),
            cause: error.to_string(),
        }
    }
}

/// Runs widget requests as background tasks and reports through `RawMsg`.
///
/// Each panel has at most one request in flight: a new trigger cancels the
/// previous one. Cancelling the service token stops everything.
pub struct WidgetService {
    fetcher: Arc<dyn JsonFetcher>,
    weather: WeatherConfig,
    image: ImageConfig,
    stock: StockConfig,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    cancel_token: CancellationToken,
    in_flight: Mutex<HashMap<WidgetKind, CancellationToken>>,
}

impl WidgetService {
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn JsonFetcher>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            weather: config.weather.clone(),
            image: config.image.clone(),
            stock: config.stock.clone(),
            raw_tx,
            cancel_token,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn fetch_weather(&self, request: RequestId) {
        let fetcher = Arc::clone(&self.fetcher);
        let config = self.weather.clone();
        self.spawn(request, async move { load_weather(fetcher.as_ref(), &config).await });
    }

    pub fn fetch_image(&self, request: RequestId, size: ImageSize) {
        let fetcher = Arc::clone(&self.fetcher);
        let config = self.image.clone();
        self.spawn(request, async move {
            load_image(fetcher.as_ref(), &config, size).await
        });
    }

    pub fn fetch_quote(&self, request: RequestId) {
        let fetcher = Arc::clone(&self.fetcher);
        let config = self.stock.clone();
        self.spawn(request, async move { load_quote(fetcher.as_ref(), &config).await });
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    /// Replaces the panel's in-flight token with a fresh child token.
    fn begin(&self, widget: WidgetKind) -> CancellationToken {
        let token = self.cancel_token.child_token();
        match self.in_flight.lock() {
            Ok(mut in_flight) => {
                if let Some(previous) = in_flight.insert(widget, token.clone()) {
                    previous.cancel();
                }
            }
            Err(e) => log::error!("widget request table poisoned: {e}"),
        }
        token
    }

    fn spawn<F>(&self, request: RequestId, job: F)
    where
        F: Future<Output = Result<WidgetPayload, Failure>> + Send + 'static,
    {
        let token = self.begin(request.widget);
        let raw_tx = self.raw_tx.clone();
        log::debug!("{} request #{} started", request.widget, request.seq);

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log::debug!("{} request #{} cancelled", request.widget, request.seq);
                }
                outcome = job => {
                    let msg = match outcome {
                        Ok(payload) => RawMsg::WidgetLoaded { request, payload },
                        Err(failure) => {
                            log::warn!("{} request failed: {}", request.widget, failure.cause);
                            RawMsg::WidgetFailed {
                                request,
                                message: failure.message.to_string(),
                            }
                        }
                    };
                    let _ = raw_tx.send(msg);
                }
            }
        });
    }
}

fn require_key(widget: WidgetKind, key: &ApiKey) -> Result<(), DashboardError> {
    if key.is_empty() {
        Err(DashboardError::Network(format!(
            "{widget} API key is not configured"
        )))
    } else {
        Ok(())
    }
}

fn parse_url(endpoint: &str, params: &[(&str, &str)]) -> Result<Url, DashboardError> {
    Url::parse_with_params(endpoint, params)
        .map_err(|e| DashboardError::Network(format!("invalid endpoint {endpoint:?}: {e}")))
}

pub fn weather_url(config: &WeatherConfig, at: Coordinates) -> Result<Url, DashboardError> {
    let lat = at.latitude.to_string();
    let lon = at.longitude.to_string();
    parse_url(
        &config.endpoint,
        &[
            ("lat", &lat),
            ("lon", &lon),
            ("units", "metric"),
            ("appid", config.api_key.expose()),
        ],
    )
}

pub fn image_url(config: &ImageConfig) -> Result<Url, DashboardError> {
    let endpoint = format!(
        "{}/collections/{}/photos",
        config.endpoint.trim_end_matches('/'),
        config.collection_id
    );
    parse_url(&endpoint, &[("client_id", config.api_key.expose())])
}

pub fn quote_url(config: &StockConfig) -> Result<Url, DashboardError> {
    parse_url(
        &config.endpoint,
        &[
            ("function", "GLOBAL_QUOTE"),
            ("symbol", &config.symbol),
            ("apikey", config.api_key.expose()),
        ],
    )
}

#[tracing::instrument(level = "debug", skip_all)]
async fn load_weather(
    fetcher: &dyn JsonFetcher,
    config: &WeatherConfig,
) -> Result<WidgetPayload, Failure> {
    let at = geolocation::resolve(config, fetcher)
        .await
        .map_err(|e| Failure {
            message: e.message(),
            cause: e.to_string(),
        })?;

    let fail = |e| Failure::new(WidgetKind::Weather, e);
    require_key(WidgetKind::Weather, &config.api_key).map_err(fail)?;
    let url = weather_url(config, at).map_err(fail)?;
    let value = fetcher.get_json(url).await.map_err(fail)?;
    let report = WeatherReport::from_json(value).map_err(fail)?;
    Ok(WidgetPayload::Weather(report))
}

#[tracing::instrument(level = "debug", skip(fetcher, config))]
async fn load_image(
    fetcher: &dyn JsonFetcher,
    config: &ImageConfig,
    size: ImageSize,
) -> Result<WidgetPayload, Failure> {
    let fail = |e| Failure::new(WidgetKind::Image, e);
    require_key(WidgetKind::Image, &config.api_key).map_err(fail)?;
    let url = image_url(config).map_err(fail)?;
    let value = fetcher.get_json(url).await.map_err(fail)?;
    let photos = photos_from_json(value).map_err(fail)?;
    let view = pick_photo(&photos, size, &mut rand::thread_rng()).ok_or_else(|| {
        fail(DashboardError::Shape(
            "collection photos: empty result set".into(),
        ))
    })?;
    Ok(WidgetPayload::Image(view))
}

#[tracing::instrument(level = "debug", skip_all, fields(symbol = %config.symbol))]
async fn load_quote(
    fetcher: &dyn JsonFetcher,
    config: &StockConfig,
) -> Result<WidgetPayload, Failure> {
    let fail = |e| Failure::new(WidgetKind::Stock, e);
    require_key(WidgetKind::Stock, &config.api_key).map_err(fail)?;
    let url = quote_url(config).map_err(fail)?;
    let value = fetcher.get_json(url).await.map_err(fail)?;
    let quote = StockQuote::from_json(value).map_err(fail)?;
    Ok(WidgetPayload::Quote(quote))
}
