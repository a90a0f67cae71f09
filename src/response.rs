//! Response resolution

use crate::error::{FetchError, HttpFailure};

/// Result type for fetch operations - generic over the value type T and
/// error type E
pub type Response<T, E = FetchError> = Result<T, E>;

/// Drive a transport response to its terminal outcome.
///
/// Classification (status, reason phrase, URL) is captured before the body
/// is touched, so a failed body read can never mask the status-based error.
/// The body drain is best-effort on both paths.
pub(crate) async fn resolve(response: reqwest::Response) -> Response<Vec<u8>> {
    let status = response.status();
    if status.is_success() {
        // A body that cannot be read on a success response counts as empty,
        // not as a failure of the request itself.
        Ok(response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default())
    } else {
        let url = response.url().to_string();
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = response.bytes().await.ok().map(|bytes| bytes.to_vec());
        Err(FetchError::Http(HttpFailure {
            status: status.as_u16(),
            status_text,
            url,
            body,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: resolve() needs a live transport response, so its behavior is
    // covered in tests/integration.rs against mockito.

    #[test]
    fn test_response_type_is_result() {
        let success: Response<Vec<u8>> = Ok(vec![1, 2, 3]);
        assert!(success.is_ok());

        let error: Response<Vec<u8>> = Err(FetchError::Cancelled);
        assert!(matches!(error, Err(FetchError::Cancelled)));
    }
}
