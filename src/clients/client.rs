//! The signing API client.
//!
//! [`DataokeClient`] ties the pieces together: it signs each parameter set
//! with the configured credentials, sends it through [`HttpClient`] and
//! decodes the response envelope.

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::DataokeConfig;
use crate::endpoints::ApiRequest;
use crate::envelope::Envelope;
use crate::error::DataokeError;
use crate::params::Params;
use crate::signer::Signer;

/// Client for the Dataoke open API.
///
/// Every call builds its own parameter set, signs it, and decodes its own
/// envelope; nothing mutable is shared between calls. Wrap the client in an
/// `Arc` to use it from several tasks.
///
/// # Example
///
/// ```rust,ignore
/// use dataoke_api::{DataokeClient, DataokeConfig, GoodsDetailsRequest};
///
/// let client = DataokeClient::new(DataokeConfig::new("app-key", "app-secret")?)?;
///
/// let request = GoodsDetailsRequest::by_goods_id("590858626868");
/// let detail = client.request(&request).await?;
/// println!("{}", detail.title);
/// ```
#[derive(Debug)]
pub struct DataokeClient {
    config: DataokeConfig,
    signer: Signer,
    http_client: HttpClient,
}

// Verify DataokeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataokeClient>();
};

impl DataokeClient {
    /// Creates a client with a default HTTP stack.
    ///
    /// # Errors
    ///
    /// Returns [`DataokeError::Http`] if the HTTP client cannot be created.
    pub fn new(config: DataokeConfig) -> Result<Self, DataokeError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self::from_parts(config, http_client))
    }

    /// Creates a client that sends through a caller-supplied `reqwest::Client`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use dataoke_api::{DataokeClient, DataokeConfig};
    ///
    /// let http = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// let config = DataokeConfig::new("app-key", "app-secret").unwrap();
    /// let client = DataokeClient::with_http_client(config, http);
    /// ```
    #[must_use]
    pub fn with_http_client(config: DataokeConfig, client: reqwest::Client) -> Self {
        let http_client = HttpClient::with_client(&config, client);
        Self::from_parts(config, http_client)
    }

    fn from_parts(config: DataokeConfig, http_client: HttpClient) -> Self {
        Self {
            signer: Signer::from_config(&config),
            config,
            http_client,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DataokeConfig {
        &self.config
    }

    /// Returns the signer used for outgoing requests.
    #[must_use]
    pub const fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Signs `params`, sends them to `path` and parses the envelope.
    ///
    /// The returned envelope may still carry a non-zero code; use
    /// [`Envelope::decode`] to turn that into an error. A non-2xx response
    /// whose body is an error envelope is returned as that envelope, so the
    /// server's code and message are kept.
    ///
    /// # Errors
    ///
    /// - [`DataokeError::Http`] on transport failure, an empty `path`, or a
    ///   non-2xx response without an error envelope.
    /// - [`DataokeError::Decode`] if the body is not an envelope.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        mut params: Params,
    ) -> Result<Envelope, DataokeError> {
        self.signer.sign(&mut params);

        let request = HttpRequest::builder(method, path)
            .params(params)
            .build()
            .map_err(HttpError::from)?;

        let envelope = match self.http_client.request(request).await {
            Ok(body) => Envelope::from_slice(&body)?,
            Err(HttpError::Response(e)) => {
                let parsed = Envelope::from_slice(e.message.as_bytes());
                match parsed {
                    Ok(envelope) if envelope.is_error() => envelope,
                    _ => return Err(HttpError::Response(e).into()),
                }
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(error) = envelope.error() {
            tracing::warn!(
                path,
                code = error.code,
                msg = %error.msg,
                request_id = error.request_id.as_deref().unwrap_or_default(),
                "Dataoke API returned an error"
            );
        }

        Ok(envelope)
    }

    /// Performs a call and decodes the payload into `T`.
    ///
    /// A successful response without payload yields `T::default()`.
    ///
    /// # Errors
    ///
    /// - [`DataokeError::Http`] on transport failure.
    /// - [`DataokeError::Api`] if the server returned a non-zero code.
    /// - [`DataokeError::Decode`] if the body or payload does not parse.
    pub async fn call<T>(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<T, DataokeError>
    where
        T: DeserializeOwned + Default,
    {
        let envelope = self.execute(method, path, params).await?;
        Ok(envelope.decode()?.unwrap_or_default())
    }

    /// Sends a typed request using its declared method.
    ///
    /// # Errors
    ///
    /// See [`DataokeClient::call`].
    pub async fn request<R: ApiRequest>(&self, request: &R) -> Result<R::Response, DataokeError> {
        self.call(R::METHOD, R::PATH, request.to_params()).await
    }

    /// Sends a typed request as GET, regardless of its declared method.
    ///
    /// # Errors
    ///
    /// See [`DataokeClient::call`].
    pub async fn get<R: ApiRequest>(&self, request: &R) -> Result<R::Response, DataokeError> {
        self.call(HttpMethod::Get, R::PATH, request.to_params()).await
    }

    /// Sends a typed request as POST, regardless of its declared method.
    ///
    /// # Errors
    ///
    /// See [`DataokeClient::call`].
    pub async fn post<R: ApiRequest>(&self, request: &R) -> Result<R::Response, DataokeError> {
        self.call(HttpMethod::Post, R::PATH, request.to_params()).await
    }
}
