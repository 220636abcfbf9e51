use crate::models::PageFile;
use crate::page::{LibraryError, Page, PageError, PageLibrary, PageSource};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: PageFile,
        source: toml::de::Error,
    },
    #[error("Invalid page {file}: {source}")]
    Page { file: PageFile, source: PageError },
    #[error(transparent)]
    Library(#[from] LibraryError),
}

/// Read and validate one page definition
pub fn load_page(file: &PageFile, content_root: &Path) -> Result<Page, IoError> {
    let absolute_path = file.relative_path().to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    parse_page(file, &content)
}

/// Validate page TOML already in memory; `file` is only used for error context
pub fn parse_page(file: &PageFile, content: &str) -> Result<Page, IoError> {
    let source: PageSource = toml::from_str(content).map_err(|source| IoError::Parse {
        file: file.clone(),
        source,
    })?;

    Page::from_source(source).map_err(|source| IoError::Page {
        file: file.clone(),
        source,
    })
}

/// Scan for page definitions under the content directory, sorted by path
pub fn scan_page_files(content_root: &Path) -> Result<Vec<PageFile>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut paths = Vec::new();
    scan_directory_recursive(content_root, &mut paths)?;

    let mut files: Vec<PageFile> = paths
        .iter()
        .filter_map(|path| path.strip_prefix(content_root).ok())
        .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
        .map(PageFile::new)
        .collect();
    files.sort();
    Ok(files)
}

/// Load every page under the content directory into a library
pub fn load_library(content_root: &Path) -> Result<PageLibrary, IoError> {
    let files = scan_page_files(content_root)?;

    let mut pages = Vec::with_capacity(files.len());
    for file in &files {
        let page = load_page(file, content_root)?;
        log::debug!("Loaded page '{}' from {file}", page.slug());
        pages.push(page);
    }

    log::info!(
        "Loaded {} pages from {}",
        pages.len(),
        content_root.display()
    );
    Ok(PageLibrary::new(pages)?)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == PageFile::EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
