use super::{response::RawResponse, Error};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    RequestBuilder,
};
use std::{fmt, time::Duration};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(method)
    }
}

/// Thin wrapper over a reqwest client that knows how to talk to the GitHub API.
///
/// The response status is never interpreted here: whatever the server sends
/// back is handed to the caller as a [`RawResponse`].
#[derive(Clone, Debug)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<HttpClient, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|cause| Error::ClientBuildError { cause })?;

        Ok(HttpClient(client))
    }

    pub async fn send(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<String>,
    ) -> Result<RawResponse, Error> {
        log::debug!("{} {}", method, url);

        let mut builder = self.0.request(method.into(), url).github_headers(token);

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|cause| Error::TransportError {
                url: url.to_owned(),
                cause,
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|cause| Error::ReadResponseError { cause })?;

        log::debug!("{} {} -> {}", method, url, status);

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }
}
