use super::BuilderExecutor;
use crate::{
    github::{github_client::GithubClient, request::CreateReleaseRequest, tag::Tag},
    http::RawResponse,
};
use anyhow::{bail, Result};

pub struct CreateReleaseBuilder<'a> {
    client: &'a GithubClient,
    owner: &'a str,
    repo: &'a str,
    release_name: String,
    release_tag: Option<Tag>,
    prerelease: bool,
}

impl<'a> CreateReleaseBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: &'a str, repo: &'a str) -> Self {
        CreateReleaseBuilder {
            client,
            owner,
            repo,
            release_name: String::new(),
            release_tag: None,
            prerelease: false,
        }
    }

    pub fn name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = release_name.into();
        self
    }

    pub fn tag(mut self, release_tag: &Tag) -> Self {
        self.release_tag = Some(release_tag.to_owned());
        self
    }

    pub fn prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }
}

impl BuilderExecutor for CreateReleaseBuilder<'_> {
    type Output = RawResponse;

    async fn execute(self) -> Result<RawResponse> {
        let Some(tag) = self.release_tag else {
            bail!("a release needs a tag")
        };

        let request = CreateReleaseRequest::new(tag.value(), self.release_name, self.prerelease);

        self.client
            .create_release(self.owner, self.repo, request)
            .await
    }
}
