//! Wire request assembly and dispatch

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;
use crate::method::Method;
use crate::response::{resolve, Response};

/// Builder for a single fetch.
///
/// Produced by the [`FetchClient`](crate::FetchClient) method constructors.
/// Collects headers, an optional binary body, and an optional cancellation
/// token, then dispatches the request with [`send`](Self::send) or
/// [`try_send`](Self::try_send).
#[derive(Debug)]
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Method,
    resource: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    cancel: Option<CancellationToken>,
}

impl RequestBuilder {
    pub(crate) fn new(client: reqwest::Client, method: Method, resource: &str) -> Self {
        Self {
            client,
            method,
            resource: resource.to_string(),
            headers: HeaderMap::new(),
            body: None,
            cancel: None,
        }
    }

    /// Add a header to the request.
    ///
    /// Entries whose name or value cannot be represented on the wire are
    /// dropped, not sent. When a body is set, `Content-Length` and
    /// `Content-Type` are derived from it and override anything set here.
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        HeaderValue: TryFrom<V>,
    {
        match (HeaderName::try_from(key), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!("dropping unrepresentable header"),
        }
        self
    }

    /// Set the binary request body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a cancellation token.
    ///
    /// Signaling the token aborts the in-flight exchange and settles the
    /// result as [`FetchError::Cancelled`]. Signaling after the result has
    /// settled is a no-op, as is signaling more than once.
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Send the request and return the response body bytes.
    ///
    /// Suspends until the exchange reaches a terminal outcome: the body
    /// bytes for a success status, [`FetchError::Http`] for any other
    /// status, [`FetchError::Transport`] when no response was obtained, or
    /// [`FetchError::Cancelled`].
    pub async fn send(self) -> Response<Vec<u8>> {
        let (request, cancel) = self.into_parts();
        match cancel {
            Some(token) => {
                tokio::select! {
                    // Polled first so an already-signaled token settles as
                    // cancelled without touching the network.
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("fetch cancelled");
                        Err(FetchError::Cancelled)
                    }
                    outcome = dispatch(request) => outcome,
                }
            }
            None => dispatch(request).await,
        }
    }

    /// Send the request, swallowing any failure.
    ///
    /// Never returns an error: HTTP failures, transport failures, and
    /// cancellation all come back as `None`. The failure description is
    /// logged through `tracing`.
    pub async fn try_send(self) -> Option<Vec<u8>> {
        let resource = self.resource.clone();
        match self.send().await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::warn!("error fetching resource \"{resource}\": {err}");
                None
            }
        }
    }

    /// Assemble the wire request, deriving body headers.
    fn into_parts(self) -> (reqwest::RequestBuilder, Option<CancellationToken>) {
        let mut headers = self.headers;
        if let Some(body) = &self.body {
            // Derived strictly from body presence; these override any
            // caller-supplied value for the same names.
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            );
        }
        let mut request = self
            .client
            .request(self.method.into(), self.resource.as_str())
            .headers(headers);
        if let Some(body) = self.body {
            request = request.body(body);
        }
        (request, self.cancel)
    }
}

/// Issue the wire request and resolve its terminal outcome.
///
/// Dropping the returned future (losing the cancellation race) aborts the
/// underlying connection.
async fn dispatch(request: reqwest::RequestBuilder) -> Response<Vec<u8>> {
    let response = request.send().await?;
    resolve(response).await
}
