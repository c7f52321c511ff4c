mod create_release_request;

pub use create_release_request::CreateReleaseRequest;

use anyhow::Result;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for CreateReleaseRequest {}
