use std::{sync::Arc, time::Duration};

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use homedash::{
    core::{
        cmd_executor::CmdExecutor,
        msg::{widget::WidgetMsg, Msg},
        state::{widgets::WidgetStatus, AppState},
    },
    domain::{image::ImageSize, DashboardError},
    infrastructure::{
        config::{ApiKey, Config},
        http::StaticFetcher,
        opener::RecordingOpener,
        store::MemoryStore,
        widget_service::WidgetService,
    },
    integration::runtime::Runtime,
};

fn oslo() -> serde_json::Value {
    json!({
        "main": {"temp": 21.4, "feels_like": 20.1},
        "weather": [{"description": "clear sky", "icon": "01d"}],
        "name": "Oslo",
        "sys": {"country": "NO"}
    })
}

fn configured() -> Config {
    let mut config = Config::bundled().expect("bundled config parses");
    config.weather.api_key = ApiKey::new("w-key");
    config.weather.latitude = Some(59.91);
    config.weather.longitude = Some(10.75);
    config.image.api_key = ApiKey::new("i-key");
    config.stock.api_key = ApiKey::new("s-key");
    config
}

fn runtime_with(config: Config, fetcher: StaticFetcher) -> (Runtime, Arc<RecordingOpener>) {
    let mut runtime = Runtime::new(AppState::new(config.clone()), Arc::new(MemoryStore::new()));
    let service = WidgetService::new(
        &config,
        Arc::new(fetcher),
        runtime.get_raw_sender(),
        CancellationToken::new(),
    );
    let opener = Arc::new(RecordingOpener::new());
    let mut executor = CmdExecutor::new(opener.clone());
    executor.set_widget_service(Arc::new(service));
    runtime.set_executor(executor);
    (runtime, opener)
}

/// Runs update cycles until `done` holds or a second has passed.
async fn settle(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) {
    for _ in 0..100 {
        runtime.run_update_cycle().expect("executor configured");
        if done(runtime.state()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("state did not settle: {:?}", runtime.state().widgets);
}

fn settled<T>(status: &WidgetStatus<T>) -> bool {
    matches!(status, WidgetStatus::Ready(_) | WidgetStatus::Failed(_))
}

#[tokio::test]
async fn test_startup_loads_weather_and_stock_fallback() {
    let fetcher = StaticFetcher::new()
        .route("openweathermap", Ok(oslo()))
        // rate-limited responses carry a note instead of a quote
        .route("alphavantage", Ok(json!({"Note": "Thank you for using Alpha Vantage!"})));
    let (mut runtime, _) = runtime_with(configured(), fetcher);

    runtime.send_msg(Msg::Startup);
    settle(&mut runtime, |s| {
        settled(&s.widgets.weather.status) && settled(&s.widgets.stock.status)
    })
    .await;

    let report = runtime.state().widgets.weather.ready().expect("weather ready");
    assert_eq!(report.headline(), "Oslo, NO");
    assert_eq!(report.summary(), "21°C, Feels like: 20°C");
    assert_eq!(
        runtime.state().widgets.stock.status,
        WidgetStatus::Failed("Could not load stock data.".into())
    );
    assert_eq!(runtime.state().widgets.image.status, WidgetStatus::Idle);
}

#[tokio::test]
async fn test_image_fetch_and_open() {
    let fetcher = StaticFetcher::new().route(
        "unsplash",
        Ok(json!([{
            "urls": {"small": "https://img.example/s.jpg", "full": "https://img.example/f.jpg"},
            "alt_description": "fjord",
            "user": {"name": "Kari"}
        }])),
    );
    let (mut runtime, opener) = runtime_with(configured(), fetcher);

    runtime.send_msg(Msg::Widget(WidgetMsg::FetchImage(ImageSize::Full)));
    settle(&mut runtime, |s| settled(&s.widgets.image.status)).await;

    let view = runtime.state().widgets.image.ready().expect("image ready");
    assert_eq!(view.url, "https://img.example/f.jpg");
    assert_eq!(view.photographer.as_deref(), Some("Kari"));

    runtime.send_msg(Msg::Widget(WidgetMsg::OpenImage));
    runtime.run_update_cycle().expect("executor configured");
    assert_eq!(opener.opened(), vec!["https://img.example/f.jpg".to_string()]);
}

#[tokio::test]
async fn test_network_failure_shows_fallback() {
    let fetcher = StaticFetcher::new().route(
        "openweathermap",
        Err(DashboardError::Network("connection refused".into())),
    );
    let (mut runtime, _) = runtime_with(configured(), fetcher);

    runtime.send_msg(Msg::Widget(WidgetMsg::FetchWeather));
    settle(&mut runtime, |s| settled(&s.widgets.weather.status)).await;

    assert_eq!(
        runtime.state().widgets.weather.status,
        WidgetStatus::Failed("Could not load weather data.".into())
    );
}

#[tokio::test]
async fn test_latest_request_wins() {
    let fetcher = StaticFetcher::new()
        .route("alphavantage", Ok(json!({"Global Quote": {
            "01. symbol": "IBM",
            "05. price": "187.5000",
            "10. change percent": "1.2%"
        }})))
        .with_delay(Duration::from_millis(50));
    let (mut runtime, _) = runtime_with(configured(), fetcher);

    runtime.send_msg(Msg::Widget(WidgetMsg::FetchQuote));
    runtime.run_update_cycle().expect("executor configured");
    runtime.send_msg(Msg::Widget(WidgetMsg::FetchQuote));
    settle(&mut runtime, |s| settled(&s.widgets.stock.status)).await;

    let quote = runtime.state().widgets.stock.ready().expect("quote ready");
    assert_eq!(quote.display_price(), "187.50");
    // the first request was cancelled, so exactly one result was applied
    tokio::time::sleep(Duration::from_millis(100)).await;
    runtime.run_update_cycle().expect("executor configured");
    assert!(runtime.state().widgets.stock.ready().is_some());
}
