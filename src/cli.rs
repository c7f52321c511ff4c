//! Command tree definitions

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use clap::{ArgAction, Args, Parser, Subcommand};

/// CLI for GitHub API
#[derive(Parser, Debug)]
#[command(name = "ghapi")]
#[command(version, about = "CLI for GitHub API", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the GitHub API
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Helper commands for releases.
    Release {
        #[command(subcommand)]
        command: ReleaseCommands,
    },

    /// Helper commands for tags.
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
}

/// Repository coordinates and token shared by every subcommand.
///
/// All of them are optional at parse time so the placeholder commands accept
/// anything; the data-bearing commands validate them before talking to GitHub.
#[derive(Args, Debug, Clone, Default)]
pub struct RepoArgs {
    /// Owner of the repo.
    #[arg(long)]
    pub owner: Option<String>,

    /// Name of the repo.
    #[arg(long)]
    pub repo: Option<String>,

    /// API token.
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateReleaseArgs {
    /// Tag name.
    #[arg(long)]
    pub tag: Option<String>,

    /// Release name.
    #[arg(long)]
    pub release: Option<String>,

    /// Mark the release as a pre-release.
    #[arg(long)]
    pub prerelease: bool,
}

#[derive(Subcommand, Debug)]
pub enum ReleaseCommands {
    /// Create a release.
    Create {
        #[command(flatten)]
        repository: RepoArgs,
        #[command(flatten)]
        release: CreateReleaseArgs,
    },

    /// List all releases.
    Ls {
        #[command(flatten)]
        repository: RepoArgs,
    },

    /// Get the ID of a release by tag name.
    Id {
        #[command(flatten)]
        repository: RepoArgs,
        /// Tag name.
        #[arg(value_name = "TAG")]
        tag: Option<String>,
    },

    /// Delete a release.
    Delete {
        #[command(flatten)]
        repository: RepoArgs,
        /// Tag name of the release.
        #[arg(value_name = "TAG")]
        tag: Option<String>,
    },

    /// Upload an asset to a release.
    Upload {
        #[command(flatten)]
        repository: RepoArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Delete a tag.
    Delete {
        #[command(flatten)]
        repository: RepoArgs,
        /// Tag name.
        #[arg(value_name = "TAG")]
        tag: Option<String>,
    },

    /// List all tags.
    Ls {
        #[command(flatten)]
        repository: RepoArgs,
    },
}
