use serde::Serialize;

/// Field order is part of the wire format: `tag_name`, `name`, `prerelease`.
#[derive(Debug, Serialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    pub fn new(tag_name: impl Into<String>, name: impl Into<String>, prerelease: bool) -> Self {
        Self {
            tag_name: tag_name.into(),
            name: name.into(),
            prerelease,
        }
    }
}
