//! Fetch client wrapper

use crate::error::FetchError;
use crate::method::Method;
use crate::request::RequestBuilder;
use crate::response::Response;

/// Fetch client over a shared transport connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a client with default transport settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create a client builder
    pub fn builder() -> FetchClientBuilder {
        FetchClientBuilder::default()
    }

    /// Create a FetchClient from a reqwest::Client
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Start a request with an arbitrary method
    pub fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), method, resource)
    }

    /// Start a DELETE request
    pub fn delete(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Delete, resource)
    }

    /// Start a GET request
    pub fn get(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Get, resource)
    }

    /// Start a HEAD request
    pub fn head(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Head, resource)
    }

    /// Start an OPTIONS request
    pub fn options(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Options, resource)
    }

    /// Start a PATCH request
    pub fn patch(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Patch, resource)
    }

    /// Start a POST request
    pub fn post(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Post, resource)
    }

    /// Start a PUT request
    pub fn put(&self, resource: &str) -> RequestBuilder {
        self.request(Method::Put, resource)
    }
}

/// Builder for transport-level client settings
#[derive(Debug, Default)]
pub struct FetchClientBuilder {
    accept_invalid_certs: bool,
    proxy: Option<url::Url>,
}

impl FetchClientBuilder {
    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Route all requests through a proxy
    pub fn proxy(mut self, url: url::Url) -> Self {
        self.proxy = Some(url);
        self
    }

    /// Build the fetch client
    pub fn build(self) -> Response<FetchClient> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(proxy_url) = self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| FetchError::Proxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(FetchError::from)?;
        Ok(FetchClient { inner: client })
    }
}

/// One-shot fetch with a default client.
///
/// Suspends and returns the response body bytes, or a structured error for
/// non-success statuses and transport failures. Use a [`FetchClient`] when
/// issuing more than one request.
pub async fn fetch(method: Method, resource: &str) -> Response<Vec<u8>> {
    FetchClient::new().request(method, resource).send().await
}

/// One-shot fetch that never fails.
///
/// Converts every failure into `None`, logging its description through
/// `tracing`.
pub async fn try_fetch(method: Method, resource: &str) -> Option<Vec<u8>> {
    FetchClient::new().request(method, resource).try_send().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = FetchClient::new();
        // Client should be constructable without panicking
        let _ = format!("{client:?}");
    }

    #[test]
    fn test_client_default() {
        let client = FetchClient::default();
        let _ = format!("{client:?}");
    }

    #[test]
    fn test_builder_build() {
        let result = FetchClientBuilder::default().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_accept_invalid_certs() {
        let result = FetchClient::builder()
            .danger_accept_invalid_certs(true)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_proxy() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("valid proxy URL");
        let result = FetchClient::builder().proxy(proxy_url).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_chained_config() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("valid proxy URL");
        let result = FetchClient::builder()
            .danger_accept_invalid_certs(true)
            .proxy(proxy_url)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_reqwest() {
        let reqwest_client = reqwest::Client::new();
        let client = FetchClient::from_reqwest(reqwest_client);
        let _ = format!("{client:?}");
    }
}
