//! Where a request's image comes from.

use url::Url;

/// Source of an image request: a bundled resource handle or a URI.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Local resource identifier (never zero).
    Resource(u32),
    /// Any URI; only `http`/`https` ones can be proxied.
    Uri(Url),
}

impl Source {
    pub fn uri(&self) -> Option<&Url> {
        match self {
            Source::Uri(url) => Some(url),
            Source::Resource(_) => None,
        }
    }

    pub fn resource_id(&self) -> Option<u32> {
        match self {
            Source::Resource(id) => Some(*id),
            Source::Uri(_) => None,
        }
    }

    /// True for `http` and `https` URIs.
    pub fn is_remote(&self) -> bool {
        self.uri()
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

impl From<Url> for Source {
    fn from(url: Url) -> Self {
        Source::Uri(url)
    }
}
