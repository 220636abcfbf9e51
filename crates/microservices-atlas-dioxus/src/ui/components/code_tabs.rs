use crate::ui::components::code_block::CodeBlock;
use dioxus::prelude::*;
use microservices_atlas_engine::{CodeTabs as CodeTabsData, TabSelection};

/// Tab strip over several snippets; exactly one snippet shows at a time
#[component]
pub fn CodeTabs(tabs: CodeTabsData) -> Element {
    let tab_count = tabs.tabs.len();
    let mut selection = use_signal(move || TabSelection::new(tab_count));
    let active = tabs.active(&selection.read()).cloned();

    rsx! {
        div {
            class: "code-tabs",
            div {
                class: "code-tab-strip",
                role: "tablist",
                for (index, snippet) in tabs.tabs.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if selection.read().is_active(index) { "code-tab active" } else { "code-tab" },
                        role: "tab",
                        "aria-selected": "{selection.read().is_active(index)}",
                        onclick: move |_| {
                            selection.write().select(index);
                        },
                        "{snippet.label()}"
                    }
                }
            }
            if let Some(snippet) = active {
                CodeBlock { snippet }
            }
        }
    }
}
