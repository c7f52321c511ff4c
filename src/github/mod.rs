pub mod builder;
pub mod github_client;
mod handler;
mod release;
mod request;
mod response;
pub mod tag;

pub use builder::BuilderExecutor;
pub use github_client::GithubClient;
pub use tag::Tag;
