use super::{connect, print_body};
use crate::{
    cli::{CreateReleaseArgs, RepoArgs},
    config::{require, ApiConfig, ValidationError},
    github::{BuilderExecutor, Tag},
};
use anyhow::{Context, Result};
use std::io::Write;

pub async fn create(
    repository: &RepoArgs,
    args: &CreateReleaseArgs,
    api: &ApiConfig,
    out: &mut impl Write,
) -> Result<()> {
    let (credentials, client) = connect(repository, api)?;

    let tag = Tag::new(require(args.tag.as_deref(), ValidationError::MissingTag)?);
    let name = require(args.release.as_deref(), ValidationError::MissingRelease)?;

    let response = client
        .repo(&credentials.owner, &credentials.repo)
        .releases()
        .create()
        .tag(&tag)
        .name(name)
        .prerelease(args.prerelease)
        .execute()
        .await
        .context("Cannot create the release")?;

    print_body(out, &response)
}

pub async fn list(repository: &RepoArgs, api: &ApiConfig, out: &mut impl Write) -> Result<()> {
    let (credentials, client) = connect(repository, api)?;

    let response = client
        .repo(&credentials.owner, &credentials.repo)
        .releases()
        .list()
        .await
        .context("Cannot list releases")?;

    print_body(out, &response)
}

pub async fn id(
    repository: &RepoArgs,
    tag: Option<&str>,
    api: &ApiConfig,
    out: &mut impl Write,
) -> Result<()> {
    let (credentials, client) = connect(repository, api)?;
    let tag = Tag::new(require(tag, ValidationError::MissingTag)?);

    let release = client
        .repo(&credentials.owner, &credentials.repo)
        .releases()
        .get_by_tag(&tag)
        .await
        .with_context(|| format!("Cannot find the release for tag {}", tag))?;

    log::debug!("release {} is named {:?}", release.id, release.name);
    writeln!(out, "{}", release.id)?;
    Ok(())
}

/// Resolves the release id from its tag, then deletes the release by id.
pub async fn delete(repository: &RepoArgs, tag: Option<&str>, api: &ApiConfig) -> Result<()> {
    let (credentials, client) = connect(repository, api)?;
    let tag = Tag::new(require(tag, ValidationError::MissingTag)?);

    let repo = client.repo(&credentials.owner, &credentials.repo);
    let releases = repo.releases();

    let release = releases
        .get_by_tag(&tag)
        .await
        .with_context(|| format!("Cannot find the release for tag {}", tag))?;

    releases
        .delete(release.id)
        .await
        .with_context(|| format!("Cannot delete release {}", release.id))
}
