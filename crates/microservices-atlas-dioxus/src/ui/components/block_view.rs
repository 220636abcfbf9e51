use crate::ui::components::{CardGrid, CodeBlock, CodeTabs, MarkdownText};
use dioxus::prelude::*;
use microservices_atlas_engine::{Block, clamp_heading_level};

/// Render one content block. Disclosure placements are resolved by the
/// page, which owns their state; here they render nothing.
#[component]
pub fn BlockView(block: Block) -> Element {
    match block {
        Block::Heading { level, text } => heading(level, text),
        Block::Text { markdown } => rsx! { MarkdownText { markdown } },
        Block::Code(snippet) => rsx! { CodeBlock { snippet } },
        Block::CodeTabs(tabs) => rsx! { CodeTabs { tabs } },
        Block::Cards { cards } => rsx! { CardGrid { cards } },
        Block::List { ordered, items } => {
            let entries = items.iter().enumerate().map(|(index, item)| {
                rsx! { li { key: "{index}", "{item}" } }
            });
            if ordered {
                rsx! { ol { class: "content-list", {entries} } }
            } else {
                rsx! { ul { class: "content-list", {entries} } }
            }
        }
        Block::Disclosure { slot } => {
            log::warn!("disclosure slot '{slot}' reached BlockView outside a page");
            rsx! {}
        }
    }
}

fn heading(level: u8, text: String) -> Element {
    match clamp_heading_level(level) {
        1 => rsx! { h1 { class: "content-heading", "{text}" } },
        2 => rsx! { h2 { class: "content-heading", "{text}" } },
        3 => rsx! { h3 { class: "content-heading", "{text}" } },
        4 => rsx! { h4 { class: "content-heading", "{text}" } },
        5 => rsx! { h5 { class: "content-heading", "{text}" } },
        _ => rsx! { h6 { class: "content-heading", "{text}" } },
    }
}
