pub mod content;
pub mod disclosure;
pub mod io;
pub mod models;
pub mod page;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::*;
pub use disclosure::*;
pub use io::*;
pub use models::PageFile;
pub use page::*;
