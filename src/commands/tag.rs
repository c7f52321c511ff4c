use super::connect;
use crate::{
    cli::RepoArgs,
    config::{require, ApiConfig, ValidationError},
    github::Tag,
};
use anyhow::{Context, Result};

/// Deletes the tag ref directly; GitHub accepts the tag name in the ref path.
pub async fn delete(repository: &RepoArgs, tag: Option<&str>, api: &ApiConfig) -> Result<()> {
    let (credentials, client) = connect(repository, api)?;
    let tag = Tag::new(require(tag, ValidationError::MissingTag)?);

    client
        .repo(&credentials.owner, &credentials.repo)
        .tags()
        .delete(&tag)
        .await
        .with_context(|| format!("Cannot delete tag {}", tag))
}
