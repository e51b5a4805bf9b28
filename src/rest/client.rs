//! p2pb2b REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{
    CredentialsProvider, HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE, MillisNonce,
    NonceProvider, encode_payload, sign_payload,
};
use crate::error::P2pb2bError;
use crate::rest::endpoints::{P2PB2B_BASE_URL, P2PB2B_WS_URL, REQUEST_PATH_PREFIX};
use crate::rest::traits::P2pb2bClient;
use crate::types::RequestEnvelope;

/// The p2pb2b REST API client.
///
/// Handles signing, nonce stamping and envelope handling for private
/// endpoints, and plain GETs for public ones. Cloning is cheap; clones
/// share the underlying HTTP connection pool and nonce provider.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use p2pb2b_api_client::auth::StaticCredentials;
/// use p2pb2b_api_client::rest::RestClient;
///
/// # async fn example() -> Result<(), p2pb2b_api_client::P2pb2bError> {
/// let client = RestClient::builder()
///     .credentials(Arc::new(StaticCredentials::new("api-key", "api-secret")))
///     .build();
///
/// let balances = client.get_balances().await?;
/// if balances.success {
///     for (currency, balance) in &balances.result {
///         println!("{currency}: {} available", balance.available);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    ws_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

/// Serialize-side wrapper that flattens the envelope fields next to the
/// endpoint-specific body fields, producing one flat JSON object.
#[derive(Serialize)]
struct SignedBody<'a, B> {
    #[serde(flatten)]
    envelope: RequestEnvelope,
    #[serde(flatten)]
    body: &'a B,
}

impl RestClient {
    /// Create a client with default settings and no credentials.
    ///
    /// Public endpoints work immediately; private ones return
    /// [`P2pb2bError::MissingCredentials`] until the client is rebuilt with
    /// a credentials provider.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// URL of the exchange's WebSocket endpoint, for callers opening their
    /// own connection with the [`crate::ws`] request builders.
    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }

    /// Send a POST to `url` with authentication headers derived from the
    /// body bytes.
    ///
    /// `X-TXC-PAYLOAD` is attached unconditionally; `X-TXC-APIKEY` and
    /// `X-TXC-SIGNATURE` only when the client has credentials. Caller
    /// headers win over computed ones on conflict. The response is returned
    /// unread so callers decide how to consume the body.
    pub(crate) async fn send_post(
        &self,
        url: &str,
        extra_headers: Option<HeaderMap>,
        body: Vec<u8>,
    ) -> Result<reqwest::Response, P2pb2bError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let payload = encode_payload(&body);
        headers.insert(HEADER_PAYLOAD, header_value(&payload)?);

        if let Some(provider) = &self.credentials {
            let credentials = provider.get_credentials();
            let signature = sign_payload(credentials, &payload)?;
            headers.insert(HEADER_API_KEY, header_value(&credentials.api_key)?);
            headers.insert(HEADER_SIGNATURE, header_value(&signature)?);
        }

        if let Some(extra) = extra_headers {
            // Caller headers replace computed ones per name, but a name
            // repeated by the caller keeps all of its values.
            for name in extra.keys() {
                headers.remove(name);
            }
            for (name, value) in extra.iter() {
                headers.append(name, value.clone());
            }
        }

        let response = self
            .http_client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Send a GET to `url`. No authentication headers are attached; a
    /// caller wanting any must pass them in `extra_headers`.
    pub(crate) async fn send_get(
        &self,
        url: &str,
        extra_headers: Option<HeaderMap>,
    ) -> Result<reqwest::Response, P2pb2bError> {
        let mut request = self.http_client.get(url);
        if let Some(extra) = extra_headers {
            request = request.headers(extra);
        }
        Ok(request.send().await?)
    }

    /// Run one authenticated operation end to end: stamp a fresh envelope,
    /// serialize, send, check the status and decode.
    ///
    /// The envelope is stamped here, immediately before the send, so the
    /// nonce can never be older than the request that carries it. The
    /// `request` field always holds the literal `/api/v2` path even when
    /// the client points at a different base URL.
    pub(crate) async fn private_post<T, B>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, P2pb2bError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        if self.credentials.is_none() {
            return Err(P2pb2bError::MissingCredentials);
        }

        let envelope = RequestEnvelope {
            request: format!("{REQUEST_PATH_PREFIX}{endpoint}"),
            nonce: self.nonce_provider.next_nonce().to_string(),
        };
        let bytes = serde_json::to_vec(&SignedBody { envelope, body })?;

        tracing::debug!(endpoint, "sending signed POST");
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.send_post(&url, None, bytes).await?;
        self.parse_response(response).await
    }

    /// Run one public GET end to end.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, P2pb2bError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.send_get(&url, None).await?;
        self.parse_response(response).await
    }

    /// Read the whole body, require HTTP 200, then decode.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, P2pb2bError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;
        check_status(status, &[StatusCode::OK], &body)?;
        serde_json::from_str(&body).map_err(|e| {
            P2pb2bError::InvalidResponse(format!("failed to decode response: {e}. Body: {body}"))
        })
    }
}

/// Check a response status against the set of codes the caller accepts.
///
/// On mismatch the error carries the expected set, the actual code and the
/// raw body text, since p2pb2b puts error detail in non-200 bodies. A 3xx
/// ends up here too: the client never follows redirects, so a redirect is
/// just another unexpected status.
pub fn check_status(
    actual: StatusCode,
    expected: &[StatusCode],
    body: &str,
) -> Result<(), P2pb2bError> {
    if expected.contains(&actual) {
        return Ok(());
    }
    Err(P2pb2bError::UnexpectedStatus {
        expected: expected.iter().map(|code| code.as_u16()).collect(),
        actual: actual.as_u16(),
        body: body.to_string(),
    })
}

fn header_value(value: &str) -> Result<HeaderValue, P2pb2bError> {
    HeaderValue::from_str(value)
        .map_err(|e| P2pb2bError::Auth(format!("header value is not valid ASCII: {e}")))
}

/// Builder for [`RestClient`].
pub struct RestClientBuilder {
    base_url: String,
    ws_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl RestClientBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: P2PB2B_BASE_URL.to_string(),
            ws_url: P2PB2B_WS_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL, mainly for pointing tests at a mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the WebSocket URL reported by [`RestClient::ws_url`].
    pub fn ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = url.into();
        self
    }

    /// Set the credentials provider used to sign private requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the default millisecond nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a timeout covering each request from connect to body end. No
    /// timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// The underlying HTTP client never follows redirects. Following one
    /// would re-send a signed body to whatever host the server named, so a
    /// 3xx is surfaced to the caller as an unexpected status instead.
    pub fn build(self) -> RestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("p2pb2b-api-client/{}", env!("CARGO_PKG_VERSION")));
        let user_agent = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("p2pb2b-api-client"));
        headers.insert(USER_AGENT, user_agent);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| no_redirect_client());

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(MillisNonce::new()));

        RestClient {
            http_client,
            base_url: self.base_url,
            ws_url: self.ws_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

/// Fallback client used if the configured builder fails; it must still
/// refuse redirects.
fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("ws_url", &self.ws_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

impl P2pb2bClient for RestClient {
    async fn get_markets(&self) -> Result<crate::rest::public::MarketsResponse, P2pb2bError> {
        RestClient::get_markets(self).await
    }

    async fn get_tickers(&self) -> Result<crate::rest::public::TickersResponse, P2pb2bError> {
        RestClient::get_tickers(self).await
    }

    async fn get_balances(&self) -> Result<crate::rest::account::BalancesResponse, P2pb2bError> {
        RestClient::get_balances(self).await
    }

    async fn get_currency_balance(
        &self,
        request: &crate::rest::account::CurrencyBalanceRequest,
    ) -> Result<crate::rest::account::CurrencyBalanceResponse, P2pb2bError> {
        RestClient::get_currency_balance(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn check_status_accepts_any_expected_code() {
        let expected = [StatusCode::OK, StatusCode::CREATED];
        assert!(check_status(StatusCode::OK, &expected, "").is_ok());
        assert!(check_status(StatusCode::CREATED, &expected, "").is_ok());
    }

    #[test]
    fn check_status_error_carries_expected_actual_and_body() {
        let err = check_status(StatusCode::BAD_GATEWAY, &[StatusCode::OK], "upstream down")
            .unwrap_err();
        match err {
            P2pb2bError::UnexpectedStatus {
                expected,
                actual,
                body,
            } => {
                assert_eq!(expected, vec![200]);
                assert_eq!(actual, 502);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn builder_defaults_point_at_production() {
        let client = RestClient::new();
        assert_eq!(client.base_url, P2PB2B_BASE_URL);
        assert_eq!(client.ws_url(), P2PB2B_WS_URL);
        assert!(client.credentials.is_none());
    }

    #[test]
    fn debug_output_does_not_expose_credentials() {
        let client = RestClient::builder()
            .credentials(Arc::new(crate::auth::StaticCredentials::new(
                "key",
                "super-secret",
            )))
            .build();
        let output = format!("{client:?}");
        assert!(output.contains("has_credentials: true"));
        assert!(!output.contains("super-secret"));
    }

    #[tokio::test]
    async fn post_without_credentials_still_carries_the_payload_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/anything"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = RestClient::builder().base_url(server.uri()).build();
        let url = format!("{}/anything", server.uri());
        client
            .send_post(&url, None, b"{\"a\":1}".to_vec())
            .await
            .unwrap();

        let request = &server.received_requests().await.unwrap()[0];
        assert!(request.headers.contains_key(HEADER_PAYLOAD));
        assert!(!request.headers.contains_key(HEADER_API_KEY));
        assert!(!request.headers.contains_key(HEADER_SIGNATURE));
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn caller_headers_win_over_computed_ones() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        extra.insert("x-custom", HeaderValue::from_static("kept"));

        let client = RestClient::builder().base_url(server.uri()).build();
        client
            .send_post(&server.uri(), Some(extra), Vec::new())
            .await
            .unwrap();

        let request = &server.received_requests().await.unwrap()[0];
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(request.headers.get("x-custom").unwrap(), "kept");
    }

    #[tokio::test]
    async fn repeated_caller_header_values_all_survive_the_merge() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let mut extra = HeaderMap::new();
        extra.append("x-request-tag", HeaderValue::from_static("alpha"));
        extra.append("x-request-tag", HeaderValue::from_static("beta"));

        let client = RestClient::builder().base_url(server.uri()).build();
        client
            .send_post(&server.uri(), Some(extra), Vec::new())
            .await
            .unwrap();

        let request = &server.received_requests().await.unwrap()[0];
        let tags: Vec<_> = request.headers.get_all("x-request-tag").iter().collect();
        assert_eq!(tags, ["alpha", "beta"]);
    }

    #[tokio::test]
    async fn get_requests_attach_no_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = RestClient::builder()
            .base_url(server.uri())
            .credentials(Arc::new(crate::auth::StaticCredentials::new("k", "s")))
            .build();
        client.send_get(&server.uri(), None).await.unwrap();

        let request = &server.received_requests().await.unwrap()[0];
        assert!(!request.headers.contains_key(HEADER_PAYLOAD));
        assert!(!request.headers.contains_key(HEADER_API_KEY));
        assert!(!request.headers.contains_key(HEADER_SIGNATURE));
    }
}
