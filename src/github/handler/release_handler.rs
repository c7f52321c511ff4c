use crate::{
    github::{
        builder::create_release_builder::CreateReleaseBuilder, github_client::GithubClient,
        release::Release, tag::Tag,
    },
    http::RawResponse,
};
use anyhow::Result;

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: &'a str, repo: &'a str) -> Self {
        ReleaseHandler {
            client,
            owner,
            repo,
        }
    }

    pub fn create(&self) -> CreateReleaseBuilder<'a> {
        CreateReleaseBuilder::new(self.client, self.owner, self.repo)
    }

    pub async fn list(&self) -> Result<RawResponse> {
        self.client.list_releases(self.owner, self.repo).await
    }

    pub async fn get_by_tag(&self, tag: &Tag) -> Result<Release> {
        self.client
            .get_release_by_tag(self.owner, self.repo, tag)
            .await
    }

    pub async fn delete(&self, release_id: u64) -> Result<()> {
        self.client
            .delete_release(self.owner, self.repo, release_id)
            .await
    }
}
