use crate::github::{github_client::GithubClient, tag::Tag};
use anyhow::Result;

pub struct TagHandler<'a> {
    client: &'a GithubClient,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> TagHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: &'a str, repo: &'a str) -> Self {
        TagHandler {
            client,
            owner,
            repo,
        }
    }

    pub async fn delete(&self, tag: &Tag) -> Result<()> {
        self.client.delete_tag(self.owner, self.repo, tag).await
    }
}
