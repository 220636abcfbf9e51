//! Flattens a page and its disclosure state into terminal lines.

use microservices_atlas_engine::{
    Block, Card, CodeSnippet, CodeTabs, DisclosureSlot, EntryHeader, EntryId, Page, PageState,
    SlotId, TabSelection, clamp_heading_level, markdown_to_plain,
};
use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

pub const OPEN_GLYPH: &str = "−";
pub const CLOSED_GLYPH: &str = "+";
const BODY_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Heading,
    Muted,
    CodeLabel,
    Code,
    Entry { open: bool, focused: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub kind: LineKind,
    pub text: String,
}

impl PageLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Disclosure entries in the order they appear on screen
pub fn focusable_entries(page: &Page) -> Vec<(&SlotId, &EntryId)> {
    placed_slots(page)
        .flat_map(|slot| {
            slot.group
                .entries()
                .iter()
                .map(move |entry| (&slot.id, &entry.id))
        })
        .collect()
}

/// Every tab strip on the page, open or not, in screen order
pub fn tab_strips(page: &Page) -> Vec<&CodeTabs> {
    let mut strips = Vec::new();
    for block in page.sections() {
        match block {
            Block::CodeTabs(tabs) => strips.push(tabs),
            Block::Disclosure { slot } => {
                let bodies = page
                    .slot(slot)
                    .into_iter()
                    .flat_map(|slot| slot.group.entries())
                    .flat_map(|entry| &entry.body);
                strips.extend(bodies.filter_map(|block| match block {
                    Block::CodeTabs(tabs) => Some(tabs),
                    _ => None,
                }));
            }
            _ => {}
        }
    }
    strips
}

fn placed_slots(page: &Page) -> impl Iterator<Item = &DisclosureSlot> {
    page.sections().iter().filter_map(|block| match block {
        Block::Disclosure { slot } => page.slot(slot),
        _ => None,
    })
}

/// Render `page` under `state`.
///
/// `tabs` holds one selection per [`tab_strips`] entry and `focused` indexes
/// into [`focusable_entries`].
pub fn page_lines(
    page: &Page,
    state: &PageState,
    tabs: &[TabSelection],
    focused: Option<usize>,
) -> Vec<PageLine> {
    let mut writer = LineWriter {
        lines: Vec::new(),
        next_entry: 0,
        next_strip: 0,
        tabs,
        focused,
    };

    writer.push(LineKind::Heading, page.title());
    if let Some(summary) = page.summary() {
        writer.push(LineKind::Muted, summary);
    }
    writer.blank();

    for block in page.sections() {
        match block {
            Block::Disclosure { slot } => {
                if let Some(slot) = page.slot(slot) {
                    writer.disclosure(slot, state);
                }
            }
            other => writer.block(other, ""),
        }
    }

    while writer.lines.last().is_some_and(|line| line.text.is_empty()) {
        writer.lines.pop();
    }
    writer.lines
}

/// Terminal rows `lines` take up when wrapped to `width` columns
pub fn wrapped_height(lines: &[PageLine], width: u16) -> u16 {
    if lines.is_empty() || width == 0 {
        return 0;
    }
    let text: Vec<Line> = lines
        .iter()
        .map(|line| Line::raw(line.text.as_str()))
        .collect();
    let rows = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

struct LineWriter<'a> {
    lines: Vec<PageLine>,
    next_entry: usize,
    next_strip: usize,
    tabs: &'a [TabSelection],
    focused: Option<usize>,
}

impl LineWriter<'_> {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(PageLine::new(kind, text));
    }

    fn blank(&mut self) {
        self.push(LineKind::Plain, "");
    }

    fn block(&mut self, block: &Block, indent: &str) {
        match block {
            Block::Heading { level, text } => {
                let marker = "#".repeat(usize::from(clamp_heading_level(*level)));
                self.push(LineKind::Heading, format!("{indent}{marker} {text}"));
                self.blank();
            }
            Block::Text { markdown } => {
                for line in markdown_to_plain(markdown).lines() {
                    self.push(LineKind::Plain, format!("{indent}{line}"));
                }
                self.blank();
            }
            Block::Code(snippet) => self.code(snippet, indent),
            Block::CodeTabs(tabs) => self.code_tabs(tabs, indent),
            Block::Cards { cards } => {
                for card in cards {
                    self.card(card, indent);
                }
            }
            Block::List { ordered, items } => {
                for (index, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}.", index + 1)
                    } else {
                        "•".to_string()
                    };
                    self.push(LineKind::Plain, format!("{indent}{marker} {item}"));
                }
                self.blank();
            }
            // Slots only sit at page level; nested placements fail validation
            Block::Disclosure { .. } => {}
        }
    }

    fn code(&mut self, snippet: &CodeSnippet, indent: &str) {
        self.push(LineKind::CodeLabel, format!("{indent}[{}]", snippet.label()));
        self.code_lines(snippet, indent);
    }

    fn code_lines(&mut self, snippet: &CodeSnippet, indent: &str) {
        for line in snippet.code.lines() {
            self.push(LineKind::Code, format!("{indent}  {line}"));
        }
        self.blank();
    }

    /// Tab labels on one line with the active one bracketed, then its code
    fn code_tabs(&mut self, tabs: &CodeTabs, indent: &str) {
        let selection = self
            .tabs
            .get(self.next_strip)
            .copied()
            .unwrap_or_else(|| TabSelection::for_tabs(tabs));
        self.next_strip += 1;

        let strip: Vec<String> = tabs
            .tabs
            .iter()
            .enumerate()
            .map(|(index, snippet)| {
                if selection.is_active(index) {
                    format!("[{}]", snippet.label())
                } else {
                    snippet.label().to_string()
                }
            })
            .collect();
        self.push(LineKind::CodeLabel, format!("{indent}{}", strip.join(" ")));

        match tabs.active(&selection) {
            Some(snippet) => self.code_lines(snippet, indent),
            None => self.blank(),
        }
    }

    fn skip_strips(&mut self, body: &[Block]) {
        self.next_strip += body
            .iter()
            .filter(|block| matches!(block, Block::CodeTabs(_)))
            .count();
    }

    fn card(&mut self, card: &dyn Card, indent: &str) {
        let mut title = String::new();
        if let Some(icon) = card.icon() {
            title.push_str(icon);
            title.push(' ');
        }
        title.push_str(card.title());
        if let Some(badge) = card.badge() {
            title.push_str(&format!(" [{badge}]"));
        }
        self.push(LineKind::Heading, format!("{indent}{title}"));

        if !card.description().is_empty() {
            self.push(LineKind::Plain, format!("{indent}  {}", card.description()));
        }
        for item in card.items() {
            self.push(LineKind::Plain, format!("{indent}  • {item}"));
        }
        self.blank();
    }

    fn disclosure(&mut self, slot: &DisclosureSlot, state: &PageState) {
        if let Some(label) = &slot.label {
            self.push(LineKind::Muted, label.clone());
        }

        let selection = state.selection(&slot.id).cloned().unwrap_or_default();
        for (entry, open) in slot.group.items(&selection) {
            let focused = self.focused == Some(self.next_entry);
            self.next_entry += 1;

            let glyph = if open { OPEN_GLYPH } else { CLOSED_GLYPH };
            self.push(
                LineKind::Entry { open, focused },
                format!("{glyph} {}{}", entry.header.title, header_meta(&entry.header)),
            );
            if open {
                for block in &entry.body {
                    self.block(block, BODY_INDENT);
                }
            } else {
                self.skip_strips(&entry.body);
            }
        }
        self.blank();
    }
}

fn header_meta(header: &EntryHeader) -> String {
    let mut out = String::new();
    if let Some(subtitle) = &header.subtitle {
        out.push_str(&format!(" · {subtitle}"));
    }

    let badges: Vec<String> = header
        .status
        .iter()
        .chain(header.date.iter())
        .cloned()
        .chain(header.tags.iter().map(|tag| format!("#{tag}")))
        .collect();
    if !badges.is_empty() {
        out.push_str(&format!("  ({})", badges.join(", ")));
    }
    out
}
