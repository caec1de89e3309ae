//! Link probes
//!
//! A probe answers one question: what HTTP status does this URL end on?
//! [`HttpProbe`] asks the real web; tests plug in their own [`LinkProbe`].

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;

use crate::config::AuditConfig;

/// Longest `Retry-After` the probe honours before giving up on a link
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// Resolves a URL to the final HTTP status code
#[async_trait]
pub trait LinkProbe: Send + Sync {
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError>;
}

/// Probe backed by a reqwest client
pub struct HttpProbe {
    client: Client,
    max_retries: u32,
}

impl HttpProbe {
    pub fn new(config: &AuditConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
        })
    }

    /// HEAD first; some sites refuse HEAD, so fall back to GET
    async fn fetch(&self, url: &Url) -> Result<Response, reqwest::Error> {
        let response = self.client.head(url.clone()).send().await?;

        if matches!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED | StatusCode::FORBIDDEN | StatusCode::NOT_IMPLEMENTED
        ) {
            return self.client.get(url.clone()).send().await;
        }

        Ok(response)
    }
}

#[async_trait]
impl LinkProbe for HttpProbe {
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
        let mut last_error = ProbeError::Unavailable;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                // Backoff: 1s, 4s, 9s...
                let delay = Duration::from_secs(u64::from(attempt).pow(2));
                tokio::time::sleep(delay).await;
            }

            match self.fetch(url).await {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    tracing::debug!(%url, attempt, "rate limited");
                    last_error = ProbeError::RateLimited;
                    if attempt == self.max_retries {
                        break;
                    }
                    let wait = response
                        .headers()
                        .get(RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(retry_after_secs);
                    if let Some(secs) = wait {
                        tokio::time::sleep(Duration::from_secs(secs)).await;
                    }
                    continue;
                }
                Ok(response) => return Ok(response.status().as_u16()),
                Err(e) => {
                    tracing::debug!(%url, attempt, error = %e, "probe failed");
                    last_error = if e.is_timeout() {
                        ProbeError::Timeout
                    } else if e.is_connect() {
                        ProbeError::Unavailable
                    } else {
                        ProbeError::Request(e)
                    };
                }
            }
        }

        Err(last_error)
    }
}

/// Parse a `Retry-After` header value in seconds, capped
pub fn retry_after_secs(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.min(MAX_RETRY_AFTER_SECS))
}

/// Errors that can occur while probing a link
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Host unreachable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{header, Method, StatusCode},
        response::{IntoResponse, Response},
        routing::any,
        Router,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[derive(Default)]
    struct Hits {
        flaky: AtomicUsize,
        limited: AtomicUsize,
        missing: AtomicUsize,
    }

    fn rate_limited(retry_after: &'static str) -> Response {
        (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after)],
        )
            .into_response()
    }

    /// Serve a small site on an ephemeral port, returning its base URL
    async fn spawn_site() -> (String, Arc<Hits>) {
        let hits = Arc::new(Hits::default());

        let app = Router::new()
            .route(
                "/no-head",
                any(|method: Method| async move {
                    if method == Method::HEAD {
                        StatusCode::METHOD_NOT_ALLOWED
                    } else {
                        StatusCode::OK
                    }
                }),
            )
            .route(
                "/flaky",
                any(|State(hits): State<Arc<Hits>>| async move {
                    if hits.flaky.fetch_add(1, Ordering::SeqCst) == 0 {
                        rate_limited("0")
                    } else {
                        StatusCode::OK.into_response()
                    }
                }),
            )
            .route(
                "/limited",
                any(|State(hits): State<Arc<Hits>>| async move {
                    hits.limited.fetch_add(1, Ordering::SeqCst);
                    rate_limited("0")
                }),
            )
            .route("/slow-limit", any(|| async { rate_limited("30") }))
            .route(
                "/missing",
                any(|State(hits): State<Arc<Hits>>| async move {
                    hits.missing.fetch_add(1, Ordering::SeqCst);
                    StatusCode::NOT_FOUND
                }),
            )
            .route(
                "/stall",
                any(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    StatusCode::OK
                }),
            )
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), hits)
    }

    fn probe_with(max_retries: u32, request_timeout_ms: u64) -> HttpProbe {
        HttpProbe::new(&AuditConfig {
            max_retries,
            request_timeout_ms,
            ..AuditConfig::default()
        })
        .unwrap()
    }

    fn url(base: &str, path: &str) -> Url {
        Url::parse(&format!("{}{}", base, path)).unwrap()
    }

    #[tokio::test]
    async fn test_head_refused_falls_back_to_get() {
        let (base, _) = spawn_site().await;
        let probe = probe_with(0, 2_000);

        assert_eq!(probe.probe(&url(&base, "/no-head")).await.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let (base, hits) = spawn_site().await;
        let probe = probe_with(2, 2_000);

        assert_eq!(probe.probe(&url(&base, "/missing")).await.unwrap(), 404);
        assert_eq!(hits.missing.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_then_success() {
        let (base, hits) = spawn_site().await;
        let probe = probe_with(1, 2_000);

        assert_eq!(probe.probe(&url(&base, "/flaky")).await.unwrap(), 200);
        assert_eq!(hits.flaky.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_persistent_rate_limit() {
        let (base, hits) = spawn_site().await;
        let probe = probe_with(1, 2_000);

        let err = probe.probe(&url(&base, "/limited")).await.unwrap_err();
        assert!(matches!(err, ProbeError::RateLimited));
        assert_eq!(hits.limited.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_last_attempt_skips_retry_after_wait() {
        let (base, _) = spawn_site().await;
        let probe = probe_with(0, 2_000);

        let started = Instant::now();
        let err = probe.probe(&url(&base, "/slow-limit")).await.unwrap_err();

        assert!(matches!(err, ProbeError::RateLimited));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_slow_host_times_out() {
        let (base, _) = spawn_site().await;
        let probe = probe_with(0, 200);

        let err = probe.probe(&url(&base, "/stall")).await.unwrap_err();
        assert!(matches!(err, ProbeError::Timeout));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = probe_with(0, 2_000);
        let err = probe
            .probe(&Url::parse(&format!("http://{}/", addr)).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Unavailable));
    }

    #[test]
    fn test_http_probe_builds_from_default_config() {
        let probe = HttpProbe::new(&AuditConfig::default()).unwrap();
        assert_eq!(probe.max_retries, 2);
    }

    #[test]
    fn test_retry_after() {
        assert_eq!(retry_after_secs("5"), Some(5));
        assert_eq!(retry_after_secs(" 12 "), Some(12));
        assert_eq!(retry_after_secs("3600"), Some(MAX_RETRY_AFTER_SECS));
        assert_eq!(retry_after_secs("Wed, 21 Oct 2026 07:28:00 GMT"), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ProbeError::Timeout.to_string(), "Request timeout");
        assert_eq!(ProbeError::RateLimited.to_string(), "Rate limited");
    }
}
