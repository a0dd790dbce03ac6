//! JSON-over-HTTP fetching for the widgets.

use std::{
    collections::VecDeque,
    future::Future,
    pin::Pin,
    sync::Mutex,
    time::Duration,
};

use reqwest::{Client, Url};
use serde_json::Value;

use crate::domain::{error::Result, DashboardError};

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Issues one GET and decodes the body as JSON.
pub trait JsonFetcher: Send + Sync {
    fn get_json(&self, url: Url) -> FetchFuture<'_>;
}

/// Production fetcher; every request is bounded by the client timeout.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DashboardError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: Url) -> Result<Value> {
        let host = url.host_str().unwrap_or_default().to_owned();
        log::debug!("GET {host}{}", url.path());

        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status();
        let text = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            return Err(DashboardError::Network(format!("{host} returned {status}")));
        }

        serde_json::from_str(&text)
            .map_err(|e| DashboardError::Shape(format!("{host} returned invalid JSON: {e}")))
    }
}

impl JsonFetcher for ReqwestFetcher {
    fn get_json(&self, url: Url) -> FetchFuture<'_> {
        Box::pin(self.fetch(url))
    }
}

fn network_error(e: reqwest::Error) -> DashboardError {
    if e.is_timeout() {
        DashboardError::Network("request timed out".into())
    } else {
        DashboardError::Network(e.without_url().to_string())
    }
}

/// Canned responses keyed by a URL substring. Routes match in insertion order.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    routes: Vec<(String, Result<Value>)>,
    delay: Option<Duration>,
    requests: Mutex<VecDeque<Url>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, pattern: impl Into<String>, response: Result<Value>) -> Self {
        self.routes.push((pattern.into(), response));
        self
    }

    /// Delays every response, so tests can overlap requests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .map(|r| r.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn respond(&self, url: &Url) -> Result<Value> {
        self.routes
            .iter()
            .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(DashboardError::Network(format!("no route for {url}"))))
    }
}

impl JsonFetcher for StaticFetcher {
    fn get_json(&self, url: Url) -> FetchFuture<'_> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push_back(url.clone());
        }
        let response = self.respond(&url);
        let delay = self.delay;
        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            response
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Serves exactly one canned HTTP response on a loopback port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        Url::parse(&format!("http://{addr}/data")).expect("url")
    }

    #[tokio::test]
    async fn test_reqwest_fetcher_decodes_json() {
        let url = serve_once("200 OK", r#"{"lat": 1.5, "lon": 2.5}"#).await;
        let fetcher = ReqwestFetcher::new(Duration::from_secs(5)).expect("client");

        let value = fetcher.get_json(url).await.expect("json");
        assert_eq!(value, json!({"lat": 1.5, "lon": 2.5}));
    }

    #[tokio::test]
    async fn test_reqwest_fetcher_non_success_is_network_error() {
        let url = serve_once("500 Internal Server Error", "{}").await;
        let fetcher = ReqwestFetcher::new(Duration::from_secs(5)).expect("client");

        let err = fetcher.get_json(url).await.expect_err("should fail");
        assert!(matches!(err, DashboardError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_reqwest_fetcher_invalid_body_is_shape_error() {
        let url = serve_once("200 OK", "<html></html>").await;
        let fetcher = ReqwestFetcher::new(Duration::from_secs(5)).expect("client");

        let err = fetcher.get_json(url).await.expect_err("should fail");
        assert!(matches!(err, DashboardError::Shape(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_reqwest_fetcher_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            // accept and never answer
            let (_socket, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let fetcher = ReqwestFetcher::new(Duration::from_millis(100)).expect("client");
        let url = Url::parse(&format!("http://{addr}/slow")).expect("url");

        let err = fetcher.get_json(url).await.expect_err("should time out");
        assert_eq!(err, DashboardError::Network("request timed out".into()));
    }

    #[tokio::test]
    async fn test_static_fetcher_routes_and_records() {
        let fetcher = StaticFetcher::new().route("/weather", Ok(json!({"ok": true})));

        let hit = fetcher
            .get_json(Url::parse("https://api.test/weather?lat=1").expect("url"))
            .await;
        let miss = fetcher
            .get_json(Url::parse("https://api.test/other").expect("url"))
            .await;

        assert_eq!(hit, Ok(json!({"ok": true})));
        assert!(matches!(miss, Err(DashboardError::Network(_))));
        assert_eq!(fetcher.requests().len(), 2);
    }
}
