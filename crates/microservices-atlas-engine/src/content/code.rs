use serde::{Deserialize, Serialize};

/// A labelled, read-only source snippet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub code: String,
}

impl CodeSnippet {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            filename: None,
            code: code.into(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Text shown above the code: the filename when there is one, otherwise the language
    pub fn label(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.language)
    }

    /// CSS class used by highlighters, `language-text` when no language is given
    pub fn language_class(&self) -> String {
        let language = self.language.trim();
        if language.is_empty() {
            "language-text".to_string()
        } else {
            format!("language-{}", language.to_ascii_lowercase())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Several snippets shown one at a time behind a tab strip
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeTabs {
    pub tabs: Vec<CodeSnippet>,
}

impl CodeTabs {
    pub fn new(tabs: Vec<CodeSnippet>) -> Self {
        Self { tabs }
    }

    pub fn active<'a>(&'a self, selection: &TabSelection) -> Option<&'a CodeSnippet> {
        self.tabs.get(selection.index())
    }
}

/// Which tab of a [`CodeTabs`] is showing.
///
/// Unlike a disclosure group, a tab strip always has exactly one tab
/// active; there is no "nothing selected" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    index: usize,
    len: usize,
}

impl TabSelection {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn for_tabs(tabs: &CodeTabs) -> Self {
        Self::new(tabs.tabs.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    /// Activate `index`; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}
