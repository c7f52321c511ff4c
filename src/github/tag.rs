use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    /// Tag name as a URL path: every `/`-separated segment is percent-encoded,
    /// the separators are kept.
    pub fn url_path(&self) -> String {
        self.name
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_new_tag() {
        let tag = Tag::new("v1.0.0");

        assert_eq!(tag.value(), "v1.0.0");
    }

    #[test]
    fn should_display_the_raw_name() {
        let tag = Tag::new("release/2024-01");

        assert_eq!(tag.to_string(), "release/2024-01");
    }

    #[test]
    fn should_keep_plain_tag_in_url_path() {
        assert_eq!(Tag::new("v1.0.0-rc.1").url_path(), "v1.0.0-rc.1");
    }

    #[test]
    fn should_keep_slashes_in_url_path() {
        assert_eq!(Tag::new("release/2024-01").url_path(), "release/2024-01");
    }

    #[test]
    fn should_encode_reserved_characters_in_url_path() {
        assert_eq!(Tag::new("v1#hotfix").url_path(), "v1%23hotfix");
        assert_eq!(Tag::new("v1?x").url_path(), "v1%3Fx");
        assert_eq!(Tag::new("%2e%2e/v1").url_path(), "%252e%252e/v1");
    }
}
