use super::{
    release::Release,
    request::{CreateReleaseRequest, SerializeRequest},
    response::ReleaseResponse,
    tag::Tag,
};
use crate::{
    config::ApiConfig,
    http::{HttpClient, Method, RawResponse},
};
use anyhow::{Context, Result};

/// Entry point to the GitHub API for a single invocation.
///
/// Owns the token and the http client; operations are reached through
/// `client.repo(owner, repo).releases()` and `.tags()`.
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: &ApiConfig, token: impl Into<String>) -> Result<Self> {
        let http = HttpClient::new(config.timeout)?;

        Ok(GithubClient {
            http,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            token: token.into(),
        })
    }

    fn releases_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, owner, repo)
    }

    fn release_by_tag_url(&self, owner: &str, repo: &str, tag: &Tag) -> String {
        format!("{}/tags/{}", self.releases_url(owner, repo), tag.url_path())
    }

    fn release_url(&self, owner: &str, repo: &str, release_id: u64) -> String {
        format!("{}/{}", self.releases_url(owner, repo), release_id)
    }

    fn tag_ref_url(&self, owner: &str, repo: &str, tag: &Tag) -> String {
        format!(
            "{}/repos/{}/{}/git/refs/tags/{}",
            self.api_url,
            owner,
            repo,
            tag.url_path()
        )
    }

    async fn call(&self, method: Method, url: &str, body: Option<String>) -> Result<RawResponse> {
        let response = self.http.send(method, url, &self.token, body).await?;

        if !response.is_success() {
            log::warn!("{} {} returned status {}", method, url, response.status());
        }

        Ok(response)
    }

    pub(super) async fn list_releases(&self, owner: &str, repo: &str) -> Result<RawResponse> {
        let uri = self.releases_url(owner, repo);

        self.call(Method::Get, &uri, None).await
    }

    pub(super) async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: CreateReleaseRequest,
    ) -> Result<RawResponse> {
        let uri = self.releases_url(owner, repo);

        let body = request.into_request()?;

        self.call(Method::Post, &uri, Some(body)).await
    }

    pub(super) async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &Tag,
    ) -> Result<Release> {
        let uri = self.release_by_tag_url(owner, repo, tag);

        let response = self.call(Method::Get, &uri, None).await?.error_for_status()?;
        let release = response
            .json::<ReleaseResponse>()
            .with_context(|| format!("Unexpected release payload for tag {}", tag))?;

        log::info!("found release {} for tag {}", release.id, tag);

        Ok(release.into())
    }

    pub(super) async fn delete_release(&self, owner: &str, repo: &str, release_id: u64) -> Result<()> {
        let uri = self.release_url(owner, repo, release_id);

        self.call(Method::Delete, &uri, None)
            .await?
            .error_for_status()?;

        log::info!("deleted release {}", release_id);

        Ok(())
    }

    pub(super) async fn delete_tag(&self, owner: &str, repo: &str, tag: &Tag) -> Result<()> {
        let uri = self.tag_ref_url(owner, repo, tag);

        self.call(Method::Delete, &uri, None)
            .await?
            .error_for_status()?;

        log::info!("deleted tag {}", tag);

        Ok(())
    }
}
