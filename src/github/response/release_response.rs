use serde::Deserialize;

/// Subset of GitHub's release object. Both `id` and `Id` spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    #[serde(alias = "Id")]
    pub id: u64,
    #[serde(alias = "Name", default)]
    pub name: Option<String>,
}
