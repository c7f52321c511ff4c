use crate::{cli::RepoArgs, config::ApiConfig};
use mockito::{Matcher, Mock, ServerGuard};
use std::time::Duration;

pub fn repo_args() -> RepoArgs {
    RepoArgs {
        owner: Some("octo".to_string()),
        repo: Some("hello".to_string()),
        token: Some("secret".to_string()),
    }
}

pub fn api_config(server: &ServerGuard) -> ApiConfig {
    ApiConfig::new(server.url(), Duration::from_secs(5))
}

/// Registers catch-all mocks that fail their assertion if any request arrives.
pub async fn forbid_requests(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "DELETE"] {
        let mock = server
            .mock(method, Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        mocks.push(mock);
    }
    mocks
}
