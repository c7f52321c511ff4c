use super::Error;
use serde::{de::DeserializeOwned, Deserialize};
use std::borrow::Cow;

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Status code and body of a GitHub response, exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        RawResponse { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Turns a non-2xx response into [`Error::ApiError`], using GitHub's
    /// `message` field when the body carries one.
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            return Ok(self);
        }

        let message = match serde_json::from_slice::<ErrorResponse>(&self.body) {
            Ok(error) => error.message,
            Err(_) => self.text().into_owned(),
        };

        Err(Error::ApiError {
            status: self.status,
            message,
        })
    }

    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice::<T>(&self.body).map_err(|cause| Error::ParseResponseError { cause })
    }
}
