//! The Crypto Pay API client.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::debug;

use crate::constants::{DEFAULT_TIMEOUT, MAINNET_API_URL, TESTNET_API_URL, TOKEN_HEADER};
use crate::error::CryptoPayError;
use crate::params::normalize;
use crate::requests::{
    CheckFilter, CreateCheckParams, CreateInvoiceParams, InvoiceFilter, StatsFilter,
    TransferFilter, TransferParams,
};

/// Async client for the Crypto Pay API.
///
/// Holds the app token, the base URL selected at construction (mainnet or
/// testnet) and a shared `reqwest::Client`, so connections are pooled for
/// the client's lifetime and released on drop. Responses come back as raw
/// [`serde_json::Value`]s, including the API's own `{ok, error}` envelope —
/// nothing is validated or reshaped here.
#[derive(Debug)]
pub struct CryptoPayClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
    me: Mutex<Option<Value>>,
}

impl CryptoPayClient {
    /// Create a mainnet client (`https://pay.crypt.bot/api`).
    ///
    /// Fails with [`CryptoPayError::Config`] if the token is empty. No
    /// network call is made here.
    pub fn new(token: impl Into<String>) -> Result<Self, CryptoPayError> {
        Self::with_api_url(token, MAINNET_API_URL)
    }

    /// Create a testnet client (`https://testnet-pay.crypt.bot/api`).
    pub fn testnet(token: impl Into<String>) -> Result<Self, CryptoPayError> {
        Self::with_api_url(token, TESTNET_API_URL)
    }

    /// Point the client at a custom API endpoint (proxy, local test server).
    pub fn with_api_url(
        token: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, CryptoPayError> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::with_http_client(token, api_url, http)
    }

    /// Use a caller-supplied `reqwest::Client` (custom pool, proxy, timeout).
    pub fn with_http_client(
        token: impl Into<String>,
        api_url: impl Into<String>,
        http: reqwest::Client,
    ) -> Result<Self, CryptoPayError> {
        let token = token.into();
        if token.is_empty() {
            return Err(CryptoPayError::Config(
                "API token must not be empty".to_string(),
            ));
        }
        Ok(Self {
            http,
            token,
            base_url: api_url.into().trim_end_matches('/').to_string(),
            me: Mutex::new(None),
        })
    }

    /// The base URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one API request and decode the body as JSON.
    ///
    /// The normalized body is sent as JSON for both GET and POST — the API
    /// accepts JSON bodies on GET. Transport failures and non-JSON bodies
    /// bubble up as distinct error kinds; HTTP status is not interpreted.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Map<String, Value>,
    ) -> Result<Value, CryptoPayError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%method, endpoint, "sending Crypto Pay API request");

        let resp = self
            .http
            .request(method, &url)
            .header(TOKEN_HEADER, &self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!(%status, endpoint, "received Crypto Pay API response");

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Normalize `params` (drop absent fields) and execute the request.
    async fn call<T: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &T,
    ) -> Result<Value, CryptoPayError> {
        self.request(method, endpoint, normalize(params)?).await
    }

    /// Test the app's authentication token and return basic app info.
    ///
    /// The first successful result is cached for the client's lifetime;
    /// pass `force` to bypass the cache and refresh it. The cache lock is
    /// held across the refresh, so concurrent non-forced calls coalesce
    /// into a single network request.
    pub async fn get_me(&self, force: bool) -> Result<Value, CryptoPayError> {
        let mut me = self.me.lock().await;
        if let Some(cached) = me.as_ref() {
            if !force {
                return Ok(cached.clone());
            }
        }
        let fresh = self.request(Method::GET, "getMe", Map::new()).await?;
        *me = Some(fresh.clone());
        Ok(fresh)
    }

    /// Create a new invoice.
    pub async fn create_invoice(
        &self,
        params: &CreateInvoiceParams,
    ) -> Result<Value, CryptoPayError> {
        self.call(Method::POST, "createInvoice", params).await
    }

    /// Send coins from the app balance to a user.
    ///
    /// Idempotent per `spend_id`: retrying with the same ID will not move
    /// funds twice.
    pub async fn transfer(&self, params: &TransferParams) -> Result<Value, CryptoPayError> {
        self.call(Method::POST, "transfer", params).await
    }

    /// List transfers created by the app.
    pub async fn get_transfers(&self, filter: &TransferFilter) -> Result<Value, CryptoPayError> {
        self.call(Method::GET, "getTransfers", filter).await
    }

    /// List invoices created by the app.
    pub async fn get_invoices(&self, filter: &InvoiceFilter) -> Result<Value, CryptoPayError> {
        self.call(Method::GET, "getInvoices", filter).await
    }

    /// Get the app's balance per asset.
    pub async fn get_balance(&self) -> Result<Value, CryptoPayError> {
        self.request(Method::GET, "getBalance", Map::new()).await
    }

    /// Get exchange rates of supported currencies.
    pub async fn get_exchange_rates(&self) -> Result<Value, CryptoPayError> {
        self.request(Method::GET, "getExchangeRates", Map::new())
            .await
    }

    /// Create a new check.
    pub async fn create_check(&self, params: &CreateCheckParams) -> Result<Value, CryptoPayError> {
        self.call(Method::POST, "createCheck", params).await
    }

    /// Delete a check created by the app.
    pub async fn delete_check(&self, check_id: u64) -> Result<Value, CryptoPayError> {
        self.call(
            Method::POST,
            "deleteCheck",
            &serde_json::json!({ "check_id": check_id }),
        )
        .await
    }

    /// List checks created by the app.
    pub async fn get_checks(&self, filter: &CheckFilter) -> Result<Value, CryptoPayError> {
        self.call(Method::GET, "getChecks", filter).await
    }

    /// Get the list of supported currencies.
    pub async fn get_currencies(&self) -> Result<Value, CryptoPayError> {
        self.request(Method::GET, "getCurrencies", Map::new()).await
    }

    /// Get app statistics for a date range.
    pub async fn get_stats(&self, filter: &StatsFilter) -> Result<Value, CryptoPayError> {
        self.call(Method::GET, "getStats", filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_base_url() {
        let client = CryptoPayClient::new("12345:token").unwrap();
        assert_eq!(client.api_url(), "https://pay.crypt.bot/api");
    }

    #[test]
    fn test_testnet_base_url() {
        let client = CryptoPayClient::testnet("12345:token").unwrap();
        assert_eq!(client.api_url(), "https://testnet-pay.crypt.bot/api");
    }

    #[test]
    fn test_empty_token_fails_fast() {
        let err = CryptoPayClient::new("").unwrap_err();
        assert!(matches!(err, CryptoPayError::Config(_)));
    }

    #[test]
    fn test_custom_url_trailing_slash_trimmed() {
        let client = CryptoPayClient::with_api_url("t", "http://localhost:9/api/").unwrap();
        assert_eq!(client.api_url(), "http://localhost:9/api");
    }
}
