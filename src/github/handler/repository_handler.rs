use super::{release_handler::ReleaseHandler, tag_handler::TagHandler};
use crate::github::github_client::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn releases(&self) -> ReleaseHandler<'_> {
        ReleaseHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn tags(&self) -> TagHandler<'_> {
        TagHandler::new(self.client, &self.owner, &self.repo)
    }
}
