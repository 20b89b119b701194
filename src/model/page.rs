use std::fmt;

/// One page of the ranked listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageDescriptor {
    /// 1-based page number as shown in the paginator
    pub number: u32,

    /// Path appended verbatim to the base URL; empty for the first page
    pub relative_path: String,
}

impl PageDescriptor {
    /// Returns the implicit first page, which is served at the base URL itself
    pub fn first() -> Self {
        Self {
            number: 1,
            relative_path: String::new(),
        }
    }

    /// Builds the absolute URL of this page by plain concatenation
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.relative_path)
    }
}

impl fmt::Display for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} ({:?})", self.number, self.relative_path)
    }
}
