use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use url::Url;

use super::error::RequestError;
use super::request::{Body, HttpRequest, HttpResponse, Route};
use super::transport::{Transport, TransportError};
use crate::config::JobBoardConfig;
use crate::credentials::{CredentialStore, SessionToken};
use crate::retry::{self, ErrorKind, RetryPolicy};

/// Resolves routes, attaches credentials, and runs requests through a transport.
#[derive(Clone)]
pub struct RequestExecutor {
    base: Url,
    credentials: Arc<dyn CredentialStore>,
    transport: Arc<dyn Transport>,
    timeout: Duration,
    connect_timeout: Duration,
    retry: RetryPolicy,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base", &self.base.as_str())
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Parse and normalize the base URL so relative routes append to its path.
fn parse_base(base_url: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| anyhow::anyhow!("invalid base URL {base_url:?}: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        anyhow::bail!("base URL must be http(s): {base_url}");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Pull the service's `message` field out of an error body.
fn error_message(resp: &HttpResponse) -> String {
    serde_json::from_slice::<Value>(&resp.body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with HTTP {}", resp.status))
}

fn map_transport_error(e: TransportError) -> RequestError {
    match retry::classify(&e) {
        ErrorKind::Timeout => RequestError::TimedOut,
        ErrorKind::Connection | ErrorKind::Other => RequestError::Network(e.to_string()),
    }
}

impl RequestExecutor {
    pub fn new(
        base_url: &str,
        credentials: Arc<dyn CredentialStore>,
        transport: Arc<dyn Transport>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            base: parse_base(base_url)?,
            credentials,
            transport,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            retry: RetryPolicy::none(),
        })
    }

    /// Build from loaded config: base URL, timeouts and retry policy.
    pub fn from_config(
        cfg: &JobBoardConfig,
        credentials: Arc<dyn CredentialStore>,
        transport: Arc<dyn Transport>,
    ) -> anyhow::Result<Self> {
        cfg.validate()?;
        Ok(Self::new(&cfg.base_url, credentials, transport)?
            .with_timeout(cfg.timeout())
            .with_connect_timeout(cfg.connect_timeout())
            .with_retry_policy(cfg.retry_policy()?))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Absolute URL for a route plus query pairs.
    pub fn url_for(&self, route: &Route, query: &[(&str, &str)]) -> Result<Url, RequestError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RequestError::Validation("base URL cannot take a path".into()))?;
            segments.pop_if_empty();
            segments.extend(route.segments.iter().map(String::as_str));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }

    /// Read the token for a route on the blocking pool. Auth routes fail fast when it is missing.
    async fn token_for(&self, route: &Route) -> Result<Option<SessionToken>, RequestError> {
        let store = Arc::clone(&self.credentials);
        let read = tokio::task::spawn_blocking(move || store.get_token())
            .await
            .map_err(|join| anyhow::anyhow!("credential read task failed: {join}"))
            .and_then(|r| r);
        let token = match read {
            Ok(t) => t.filter(|t| !t.is_blank()),
            Err(e) => {
                tracing::warn!("credential store read failed: {e:#}");
                None
            }
        };
        if route.auth_required && token.is_none() {
            tracing::debug!(path = %route.path(), "no session token; request not sent");
            return Err(RequestError::Unauthenticated);
        }
        Ok(token)
    }

    /// One attempt on the blocking pool, bounded by the call timeout.
    async fn send_once(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let transport = Arc::clone(&self.transport);
        let handle = tokio::task::spawn_blocking(move || transport.send(&request));
        match tokio::time::timeout(self.timeout, handle).await {
            Err(_) => Err(TransportError::TimedOut),
            Ok(Err(join)) => Err(TransportError::Other(format!("transport task failed: {join}"))),
            Ok(Ok(result)) => result,
        }
    }

    /// Execute a request and decode the JSON body.
    ///
    /// Success with an empty body yields `Value::Null`. HTTP 401 is
    /// `Unauthenticated`; other non-2xx statuses are `Service` errors.
    pub async fn execute(
        &self,
        route: &Route,
        body: Body,
        query: &[(&str, &str)],
    ) -> Result<Value, RequestError> {
        let token = self.token_for(route).await?;
        let url = self.url_for(route, query)?;

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = &token {
            headers.push((
                "Authorization".to_string(),
                format!("Bearer {}", token.as_str()),
            ));
        }

        let request = HttpRequest {
            method: route.method,
            url: url.to_string(),
            headers,
            body,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
        };

        let policy = if route.method.is_idempotent() {
            self.retry
        } else {
            RetryPolicy::none()
        };

        let path = route.path();
        let started = Instant::now();
        let response = retry::run_with_retry(&policy, retry::classify, |attempt| {
            tracing::debug!(method = %route.method, path = %path, attempt, "sending request");
            self.send_once(request.clone())
        })
        .await
        .map_err(|e| {
            tracing::warn!(method = %route.method, path = %path, "request failed: {e}");
            map_transport_error(e)
        })?;

        tracing::debug!(
            method = %route.method,
            path = %path,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );

        if response.status == 401 {
            return Err(RequestError::Unauthenticated);
        }
        if !response.is_success() {
            return Err(RequestError::Service {
                status: response.status as u16,
                message: error_message(&response),
            });
        }
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&response.body)
            .map_err(|e| RequestError::InvalidResponse(format!("{path}: {e}")))
    }
}
