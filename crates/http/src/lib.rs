//! reqwest-backed [`SearchTransport`] for searchbox.
//!
//! Joins the controller's path-and-query onto a base origin and issues a
//! plain GET. The body is only read for 2xx responses.

use reqwest::{Client, ClientBuilder, Url};
use tracing::debug;

use searchbox_core::{SearchConfig, SearchResponse, SearchTransport, TransportError};

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Transport against `base_url` with a default client.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self { client: Client::new(), base: parse_base(base_url)? })
    }

    /// Transport configured from `searchbox.toml` settings.
    pub fn from_config(config: &SearchConfig) -> Result<Self, TransportError> {
        Self::with_base(&config.base_url, config)
    }

    /// Like [`from_config`](Self::from_config), but with an explicit origin
    /// (e.g. the page origin in a browser build).
    pub fn with_base(base_url: &str, config: &SearchConfig) -> Result<Self, TransportError> {
        let base = parse_base(base_url)?;

        let client = apply_timeout(Client::builder(), config)
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for an already-encoded path and query.
    pub fn resolve(&self, path_and_query: &str) -> Result<Url, TransportError> {
        self.base
            .join(path_and_query)
            .map_err(|e| TransportError::new(format!("invalid request path '{path_and_query}': {e}")))
    }
}

impl SearchTransport for HttpTransport {
    async fn get(&self, path_and_query: &str) -> Result<SearchResponse, TransportError> {
        let url = self.resolve(path_and_query)?;
        debug!(url = url.as_str(), "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(SearchResponse::status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;
        Ok(SearchResponse { status: status.as_u16(), body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_timeout(builder: ClientBuilder, config: &SearchConfig) -> ClientBuilder {
    match config.timeout() {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

// Browser fetch has no client-level timeout; the platform's own applies.
#[cfg(target_arch = "wasm32")]
fn apply_timeout(builder: ClientBuilder, _config: &SearchConfig) -> ClientBuilder {
    builder
}

fn parse_base(base_url: &str) -> Result<Url, TransportError> {
    let url = Url::parse(base_url)
        .map_err(|e| TransportError::new(format!("invalid base URL '{base_url}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(TransportError::new(format!("'{base_url}' cannot be used as a base URL")));
    }
    Ok(url)
}
