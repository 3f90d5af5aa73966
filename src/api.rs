pub mod client;
pub mod forecast;
pub mod window;

use crate::prelude::*;

/// Failure at the HTTP boundary.
///
/// Callers log these and keep whatever state they already had; a fetch
/// failure never propagates into the view layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("the request could not complete")]
    Network(#[source] reqwest::Error),

    #[error("the response body does not match the expected shape")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() { Self::Decode(error) } else { Self::Network(error) }
    }
}

impl FetchError {
    /// Log the failure and move on.
    pub fn swallow(&self, operation: &str) {
        error!(error = %self, "{operation} failed");
    }
}
