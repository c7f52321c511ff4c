use super::response::ReleaseResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub id: u64,
    pub name: Option<String>,
}

impl Release {
    pub fn new(id: u64, name: Option<String>) -> Self {
        Release { id, name }
    }
}

impl From<ReleaseResponse> for Release {
    fn from(response: ReleaseResponse) -> Self {
        Release::new(response.id, response.name)
    }
}
