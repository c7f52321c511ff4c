use crate::cli::RepoArgs;
use std::{fmt, time::Duration};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        ApiConfig {
            api_url: api_url.into(),
            timeout,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Must provide a repo owner.")]
    MissingOwner,
    #[error("Must provide a repo name.")]
    MissingRepo,
    #[error("Must provide an API token.")]
    MissingToken,
    #[error("Must provide a tag name.")]
    MissingTag,
    #[error("Must provide a release name.")]
    MissingRelease,
}

/// Returns the value when it is present and non-empty.
pub fn require(value: Option<&str>, missing: ValidationError) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(missing),
    }
}

pub struct Credentials {
    pub owner: String,
    pub repo: String,
    pub token: String,
}

impl TryFrom<&RepoArgs> for Credentials {
    type Error = ValidationError;

    fn try_from(args: &RepoArgs) -> Result<Self, Self::Error> {
        let owner = require(args.owner.as_deref(), ValidationError::MissingOwner)?;
        let repo = require(args.repo.as_deref(), ValidationError::MissingRepo)?;
        let token = require(args.token.as_deref(), ValidationError::MissingToken)?;

        Ok(Credentials { owner, repo, token })
    }
}

// keeps the token out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(owner: Option<&str>, repo: Option<&str>, token: Option<&str>) -> RepoArgs {
        RepoArgs {
            owner: owner.map(str::to_owned),
            repo: repo.map(str::to_owned),
            token: token.map(str::to_owned),
        }
    }

    #[test]
    fn should_build_credentials_from_complete_args() {
        let credentials =
            Credentials::try_from(&args(Some("octo"), Some("hello"), Some("secret"))).unwrap();

        assert_eq!(credentials.owner, "octo");
        assert_eq!(credentials.repo, "hello");
        assert_eq!(credentials.token, "secret");
    }

    #[test]
    fn should_report_missing_values_in_order() {
        let missing_all = Credentials::try_from(&args(None, None, None));
        let missing_repo = Credentials::try_from(&args(Some("octo"), None, None));
        let missing_token = Credentials::try_from(&args(Some("octo"), Some("hello"), None));

        assert_eq!(missing_all.unwrap_err(), ValidationError::MissingOwner);
        assert_eq!(missing_repo.unwrap_err(), ValidationError::MissingRepo);
        assert_eq!(missing_token.unwrap_err(), ValidationError::MissingToken);
    }

    #[test]
    fn should_treat_empty_values_as_missing() {
        let result = Credentials::try_from(&args(Some("octo"), Some("hello"), Some("")));

        assert_eq!(result.unwrap_err(), ValidationError::MissingToken);
    }

    #[test]
    fn should_not_leak_token_in_debug_output() {
        let credentials =
            Credentials::try_from(&args(Some("octo"), Some("hello"), Some("secret"))).unwrap();

        let debug = format!("{:?}", credentials);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("octo"));
    }

    #[test]
    fn should_match_validation_messages() {
        assert_eq!(ValidationError::MissingOwner.to_string(), "Must provide a repo owner.");
        assert_eq!(ValidationError::MissingRepo.to_string(), "Must provide a repo name.");
        assert_eq!(ValidationError::MissingToken.to_string(), "Must provide an API token.");
        assert_eq!(ValidationError::MissingTag.to_string(), "Must provide a tag name.");
        assert_eq!(ValidationError::MissingRelease.to_string(), "Must provide a release name.");
    }
}
