//! Endpoint client for the loyalty API.
//!
//! [`LoyaltyClient`] exposes one method per remote endpoint. Every method
//! resolves its path, serializes the body, sends the request through the
//! configured [`Transport`] and returns the normalized [`Envelope`]. The
//! client holds no mutable state, so one instance can serve concurrent calls.

use crate::config::Configuration;
use crate::endpoints::Endpoint;
use crate::errors::Result;
use crate::http::{build_request, ApiRequest, ReqwestTransport, Transport};
use crate::response::{normalize, Envelope};
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Client for the loyalty REST API.
#[derive(Clone)]
pub struct LoyaltyClient {
    /// Base URL every endpoint path is joined onto
    base_url: Option<String>,

    /// Key sent in the `APIKey` header
    api_key: Option<String>,

    /// Transport used to execute requests
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for LoyaltyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoyaltyClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl LoyaltyClient {
    /// Creates a client from a configuration snapshot.
    ///
    /// When the configuration carries a timeout, the default HTTP client is
    /// built with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use brink_loyalty::client::LoyaltyClient;
    /// use brink_loyalty::config::Configuration;
    ///
    /// let config = Configuration::new("https://api.example.com", "TEST_API_KEY");
    /// let client = LoyaltyClient::new(&config).unwrap();
    /// assert_eq!(client.base_url(), Some("https://api.example.com"));
    /// ```
    pub fn new(config: &Configuration) -> Result<Self> {
        let transport = match config.timeout {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::default(),
        };

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            transport: Arc::new(transport),
        })
    }

    /// Creates a client from a base URL and optional API key.
    pub fn from_parts(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key,
            transport: Arc::new(ReqwestTransport::default()),
        }
    }

    /// Sets a custom HTTP client.
    pub fn with_http_client(self, client: Client) -> Self {
        self.with_transport(ReqwestTransport::new(client))
    }

    /// Sets a custom transport.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Whether requests carry an `APIKey` header.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Looks up the loyalty account attached to an order.
    ///
    /// `POST /Locations/{storeId}/Orders/{orderId}/Lookup`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use brink_loyalty::client::LoyaltyClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = LoyaltyClient::from_parts("https://api.example.com", Some("KEY".into()));
    /// let body = json!({"emailAddress": "user@example.com", "order": {"id": 123456}});
    ///
    /// let response = client.lookup("STORE123", "ORDER456", &body).await?;
    /// if response.is_success() {
    ///     println!("Points: {}", response.body["points"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup<B>(&self, store_id: &str, order_id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Endpoint::Lookup { store_id, order_id }, Some(body))
            .await
    }

    /// Closes an order with the loyalty service.
    ///
    /// `POST /Locations/{storeId}/Orders/{orderId}/Finalize`
    pub async fn finalize<B>(&self, store_id: &str, order_id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Endpoint::Finalize { store_id, order_id }, Some(body))
            .await
    }

    /// Fetches the store's loyalty behavior flags.
    ///
    /// `GET /Locations/{storeId}/POSConfigurations`
    pub async fn pos_configurations(&self, store_id: &str) -> Result<Envelope> {
        self.send::<()>(Endpoint::PosConfigurations { store_id }, None)
            .await
    }

    /// Requests loyalty lines to print on the receipt.
    ///
    /// `POST /Locations/{storeId}/Orders/{orderId}/Receipt`
    pub async fn receipt<B>(&self, store_id: &str, order_id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Endpoint::Receipt { store_id, order_id }, Some(body))
            .await
    }

    /// Redeems the selected rewards on an order.
    ///
    /// `POST /Locations/{storeId}/Orders/{orderId}/Redeem`
    pub async fn redeem<B>(&self, store_id: &str, order_id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Endpoint::Redeem { store_id, order_id }, Some(body))
            .await
    }

    /// Voids rewards previously redeemed on an order.
    ///
    /// `DELETE /Locations/{storeId}/Orders/{orderId}/Redeem` with a JSON body.
    pub async fn remove_rewards<B>(
        &self,
        store_id: &str,
        order_id: &str,
        body: &B,
    ) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Endpoint::RemoveRewards { store_id, order_id }, Some(body))
            .await
    }

    /// Validates the rewards currently applied to an order.
    ///
    /// `POST /Locations/{storeId}/Orders/{orderId}/Validate`
    pub async fn validate_order<B>(
        &self,
        store_id: &str,
        order_id: &str,
        body: &B,
    ) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Endpoint::Validate { store_id, order_id }, Some(body))
            .await
    }

    /// Builds the request descriptor for `endpoint` without sending it.
    pub fn prepare<B>(&self, endpoint: Endpoint<'_>, body: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let body = match body {
            Some(body) if endpoint.method().carries_body() => Some(serde_json::to_string(body)?),
            _ => None,
        };

        build_request(
            endpoint.method(),
            self.base_url.as_deref(),
            &endpoint.path(),
            self.api_key.as_deref(),
            body,
        )
    }

    /// Sends a request to any endpoint and normalizes the response.
    ///
    /// HTTP error statuses are returned as envelopes; only configuration,
    /// serialization and transport failures are errors.
    pub async fn send<B>(&self, endpoint: Endpoint<'_>, body: Option<&B>) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let request = self.prepare(endpoint, body)?;

        tracing::debug!(
            operation = endpoint.name(),
            method = %request.method,
            url = %request.url,
            api_key = self.api_key.is_some(),
            "Sending loyalty request"
        );

        let raw = self.transport.execute(request).await.map_err(|e| {
            tracing::debug!(operation = endpoint.name(), error = %e, "Loyalty request failed");
            e
        })?;

        let envelope = normalize(raw);
        tracing::debug!(
            operation = endpoint.name(),
            status = envelope.code,
            raw_body = envelope.body.is_raw(),
            "Loyalty response received"
        );

        Ok(envelope)
    }
}
