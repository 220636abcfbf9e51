use super::{CodeSnippet, CodeTabs, ContentCard};
use crate::page::SlotId;
use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};

/// Building block of a page or of a disclosure entry's body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        text: String,
    },
    /// Prose authored as CommonMark
    Text { markdown: String },
    Code(CodeSnippet),
    CodeTabs(CodeTabs),
    Cards {
        #[serde(default)]
        cards: Vec<ContentCard>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        items: Vec<String>,
    },
    /// Places the page's disclosure slot `slot` at this position
    Disclosure { slot: SlotId },
}

fn default_heading_level() -> u8 {
    2
}

impl Block {
    pub fn text(markdown: impl Into<String>) -> Self {
        Block::Text {
            markdown: markdown.into(),
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn is_disclosure(&self) -> bool {
        matches!(self, Block::Disclosure { .. })
    }
}

/// Heading level clamped into the `h1`..=`h6` range
pub fn clamp_heading_level(level: u8) -> u8 {
    level.clamp(1, 6)
}

/// Render CommonMark prose to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Flatten CommonMark prose to plain text, keeping paragraph breaks
pub fn markdown_to_plain(markdown: &str) -> String {
    use pulldown_cmark::{Event, TagEnd};

    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => out.push('\n'),
            _ => {}
        }
    }
    out.trim_end().to_string()
}
