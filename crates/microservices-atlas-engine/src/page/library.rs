use super::Page;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("two pages share the slug '{0}'")]
    DuplicateSlug(String),
}

/// Every page of the site, in navigation order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLibrary {
    pages: Vec<Page>,
}

impl PageLibrary {
    pub fn new(pages: Vec<Page>) -> Result<Self, LibraryError> {
        for (i, page) in pages.iter().enumerate() {
            if pages[..i].iter().any(|p| p.slug() == page.slug()) {
                return Err(LibraryError::DuplicateSlug(page.slug().to_string()));
            }
        }
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn get(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.slug() == slug)
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.slug() == slug)
    }

    pub fn first(&self) -> Option<&Page> {
        self.pages.first()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
