use crate::ui::components::block_view::BlockView;
use dioxus::prelude::*;
use microservices_atlas_engine::{DisclosureEntry, EntryId};

pub const OPEN_GLYPH: &str = "−";
pub const CLOSED_GLYPH: &str = "+";

/// One collapsible entry. Holds no state: whether it is open comes from
/// the owning group, and activating the header reports the entry id back.
#[component]
pub fn DisclosureItem(
    entry: DisclosureEntry,
    is_open: bool,
    on_toggle: EventHandler<EntryId>,
) -> Element {
    let classes = if is_open {
        "disclosure-item open"
    } else {
        "disclosure-item"
    };
    let glyph = if is_open { OPEN_GLYPH } else { CLOSED_GLYPH };
    let header = entry.header.clone();
    let id = entry.id.clone();

    rsx! {
        div {
            class: "{classes}",
            button {
                class: "disclosure-header",
                r#type: "button",
                "aria-expanded": "{is_open}",
                onclick: move |_| on_toggle.call(id.clone()),
                span {
                    class: "disclosure-title",
                    "{header.title}"
                    if let Some(ref subtitle) = header.subtitle {
                        small { class: "disclosure-subtitle", "{subtitle}" }
                    }
                }
                if header.has_metadata() {
                    span {
                        class: "disclosure-meta",
                        if let Some(ref status) = header.status {
                            span { class: "badge status", "{status}" }
                        }
                        if let Some(ref date) = header.date {
                            span { class: "badge date", "{date}" }
                        }
                        for tag in header.tags.iter() {
                            span { class: "badge tag", "{tag}" }
                        }
                    }
                }
                span {
                    class: "disclosure-indicator",
                    "{glyph}"
                }
            }
            if is_open {
                div {
                    class: "disclosure-body",
                    for (index, block) in entry.body.iter().enumerate() {
                        BlockView { key: "{index}", block: block.clone() }
                    }
                }
            }
        }
    }
}
