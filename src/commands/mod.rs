//! Subcommand handlers
//!
//! Every handler validates its arguments before any request is made and
//! writes its output to the given writer.

pub mod release;
pub mod tag;

#[cfg(test)]
mod testing;

use crate::{
    cli::{Commands, ReleaseCommands, RepoArgs, TagCommands},
    config::{ApiConfig, Credentials},
    github::GithubClient,
    http::RawResponse,
};
use anyhow::Result;
use std::io::Write;

pub const NOT_IMPLEMENTED: &str = "Feature not implemented.";

pub async fn run(command: Commands, api: &ApiConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Release { command } => match command {
            ReleaseCommands::Create {
                repository,
                release: args,
            } => release::create(&repository, &args, api, out).await,
            ReleaseCommands::Ls { repository } => release::list(&repository, api, out).await,
            ReleaseCommands::Id { repository, tag: name } => {
                release::id(&repository, name.as_deref(), api, out).await
            }
            ReleaseCommands::Delete { repository, tag: name } => {
                release::delete(&repository, name.as_deref(), api).await
            }
            ReleaseCommands::Upload { .. } => not_implemented(out),
        },
        Commands::Tag { command } => match command {
            TagCommands::Delete { repository, tag: name } => {
                tag::delete(&repository, name.as_deref(), api).await
            }
            TagCommands::Ls { .. } => not_implemented(out),
        },
    }
}

pub fn not_implemented(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", NOT_IMPLEMENTED)?;
    Ok(())
}

fn connect(repository: &RepoArgs, api: &ApiConfig) -> Result<(Credentials, GithubClient)> {
    let credentials = Credentials::try_from(repository)?;
    log::debug!("using {:?}", credentials);

    let client = GithubClient::new(api, &credentials.token)?;

    Ok((credentials, client))
}

/// Prints the body as received, whatever the status code.
fn print_body(out: &mut impl Write, response: &RawResponse) -> Result<()> {
    out.write_all(response.body())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::CreateReleaseArgs, config::ValidationError};
    use mockito::Server;
    use testing::{api_config, forbid_requests, repo_args};

    fn data_commands(repository: RepoArgs) -> Vec<Commands> {
        let tag = Some("v1.0".to_string());
        vec![
            Commands::Release {
                command: ReleaseCommands::Create {
                    repository: repository.clone(),
                    release: CreateReleaseArgs {
                        tag: tag.clone(),
                        release: Some("First".to_string()),
                        prerelease: false,
                    },
                },
            },
            Commands::Release {
                command: ReleaseCommands::Ls {
                    repository: repository.clone(),
                },
            },
            Commands::Release {
                command: ReleaseCommands::Id {
                    repository: repository.clone(),
                    tag: tag.clone(),
                },
            },
            Commands::Release {
                command: ReleaseCommands::Delete {
                    repository: repository.clone(),
                    tag: tag.clone(),
                },
            },
            Commands::Tag {
                command: TagCommands::Delete { repository, tag },
            },
        ]
    }

    async fn assert_validation_error(repository: RepoArgs, expected: ValidationError) {
        let mut server = Server::new_async().await;
        let mocks = forbid_requests(&mut server).await;
        let api = api_config(&server);

        for command in data_commands(repository) {
            let mut out = Vec::new();
            let err = run(command, &api, &mut out).await.unwrap_err();

            assert_eq!(err.downcast_ref::<ValidationError>(), Some(&expected));
            assert!(out.is_empty());
        }

        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn should_require_owner_without_calling_github() {
        let repository = RepoArgs {
            owner: None,
            ..repo_args()
        };

        assert_validation_error(repository, ValidationError::MissingOwner).await;
    }

    #[tokio::test]
    async fn should_require_repo_without_calling_github() {
        let repository = RepoArgs {
            repo: None,
            ..repo_args()
        };

        assert_validation_error(repository, ValidationError::MissingRepo).await;
    }

    #[tokio::test]
    async fn should_require_token_without_calling_github() {
        let repository = RepoArgs {
            token: Some(String::new()),
            ..repo_args()
        };

        assert_validation_error(repository, ValidationError::MissingToken).await;
    }

    #[tokio::test]
    async fn should_print_placeholder_for_release_upload() -> Result<()> {
        let mut server = Server::new_async().await;
        let mocks = forbid_requests(&mut server).await;
        let mut out = Vec::new();

        let command = Commands::Release {
            command: ReleaseCommands::Upload {
                repository: RepoArgs::default(),
            },
        };
        run(command, &api_config(&server), &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "Feature not implemented.\n");
        for mock in mocks {
            mock.assert_async().await;
        }

        Ok(())
    }

    #[tokio::test]
    async fn should_print_placeholder_for_tag_ls() -> Result<()> {
        let mut server = Server::new_async().await;
        let mocks = forbid_requests(&mut server).await;
        let mut out = Vec::new();

        let command = Commands::Tag {
            command: TagCommands::Ls {
                repository: repo_args(),
            },
        };
        run(command, &api_config(&server), &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "Feature not implemented.\n");
        for mock in mocks {
            mock.assert_async().await;
        }

        Ok(())
    }
}
