use relative_path::{RelativePath, RelativePathBuf};
use std::fmt;

/// Location of a page definition relative to the content root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageFile {
    relative_path: RelativePathBuf,
}

impl PageFile {
    pub const EXTENSION: &'static str = "toml";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File stem, e.g. `gateways/rate-limiting` -> `rate-limiting`
    pub fn stem(&self) -> &str {
        self.relative_path.file_stem().unwrap_or("untitled")
    }
}

impl fmt::Display for PageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path.as_str())
    }
}

impl From<RelativePathBuf> for PageFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PageFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
