//! HTTP client for Dataoke API communication.
//!
//! This module provides the [`HttpClient`] type, which sends already-signed
//! requests to the gateway and returns the raw response body.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, CONTENT_TYPE};
use crate::config::{DataokeConfig, GatewayUrl};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Dataoke gateway.
///
/// The client handles:
/// - URL construction from the configured gateway
/// - Default headers including User-Agent and the JSON content type
/// - Placing parameters in the query string (GET) or body (POST)
/// - Mapping non-2xx statuses to [`HttpResponseError`]
///
/// Signing is not done here; see [`crate::Signer`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use dataoke_api::DataokeConfig;
/// use dataoke_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = DataokeConfig::new("app-key", "app-secret")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "goods/get-goods-details")
///     .param("goodsId", "590858626868")
///     .build()?;
///
/// let body = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Gateway base URL, always ending with `/`.
    gateway: GatewayUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Whether to log requests and responses.
    debug: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use dataoke_api::DataokeConfig;
    /// use dataoke_api::clients::HttpClient;
    ///
    /// let config = DataokeConfig::new("app-key", "app-secret").unwrap();
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.gateway().as_ref(), "https://openapi.dataoke.com/api/");
    /// ```
    pub fn new(config: &DataokeConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a new HTTP client that sends through `client`.
    ///
    /// Use this to supply timeouts, proxies or connection limits.
    #[must_use]
    pub fn with_client(config: &DataokeConfig, client: reqwest::Client) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            "User-Agent".to_string(),
            user_agent(config.user_agent_prefix()),
        );
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), CONTENT_TYPE.to_string());

        Self {
            client,
            gateway: config.gateway().clone(),
            default_headers,
            debug: config.debug(),
        }
    }

    /// Returns the gateway base URL for this client.
    #[must_use]
    pub const fn gateway(&self) -> &GatewayUrl {
        &self.gateway
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the gateway and returns the response body.
    ///
    /// GET requests carry the parameters in the query string; POST requests
    /// carry them as a form-encoded body. Both declare a JSON content type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<Vec<u8>, HttpError> {
        request.verify()?;

        let url = self.gateway.join(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => {
                let query: Vec<(&str, &str)> = request.params.iter().collect();
                self.client.get(&url).query(&query)
            }
            // `.form()` would replace the JSON content type.
            HttpMethod::Post => self.client.post(&url).body(request.query_string()),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if self.debug {
            tracing::debug!(method = %request.http_method, url = %url, "Dataoke request");
            for (key, value) in request.params.iter() {
                tracing::debug!(param = key, value = value, "Dataoke request parameter");
            }
        }

        let res = req_builder.send().await?;
        let status = res.status();
        let body = res.bytes().await?.to_vec();

        if self.debug {
            tracing::debug!(
                status = status.as_u16(),
                body = %pretty_body(&body),
                "Dataoke response"
            );
        }

        if !status.is_success() {
            return Err(HttpError::Response(HttpResponseError {
                code: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            }));
        }

        Ok(body)
    }
}

/// Builds the User-Agent header value.
fn user_agent(prefix: Option<&str>) -> String {
    let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("{prefix}Dataoke API Library v{SDK_VERSION} | Rust {rust_version}")
}

/// Indents a JSON body for logging; anything else is logged as text.
fn pretty_body(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}
