//! Cancellable async HTTP fetch with uniform binary bodies.
//!
//! This crate wraps [`reqwest`] with three guarantees:
//!
//! - every request can carry a [`CancellationToken`] that aborts the
//!   in-flight exchange when signaled,
//! - response bodies are always delivered as raw bytes, whatever the
//!   server's content type,
//! - non-success statuses come back as a structured [`HttpFailure`]
//!   carrying status, reason phrase, URL, and the (best-effort) body.
//!
//! # Example
//!
//! ```no_run
//! use http_fetch::{FetchClient, Method};
//!
//! async fn example() -> Result<(), http_fetch::FetchError> {
//!     let client = FetchClient::new();
//!     let bytes = client.get("https://api.example.com/data").send().await?;
//!     println!("{} bytes", bytes.len());
//!
//!     let echoed = client
//!         .post("https://api.example.com/echo")
//!         .body(vec![1, 2, 3])
//!         .send()
//!         .await?;
//!     assert_eq!(echoed, vec![1, 2, 3]);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod method;
mod request;
mod response;

pub use client::{fetch, try_fetch, FetchClient, FetchClientBuilder};
pub use error::{FetchError, HttpFailure};
pub use method::Method;
pub use request::RequestBuilder;
pub use response::Response;
pub use tokio_util::sync::CancellationToken;
