mod client;
mod response;

pub use client::{HttpClient, Method};
pub use response::RawResponse;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build the http client")]
    ClientBuildError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request to {url} failed")]
    TransportError {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response body")]
    ReadResponseError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("GitHub responded with status {status}: {message}")]
    ApiError { status: u16, message: String },
}
