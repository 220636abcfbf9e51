use crate::ui::components::disclosure_item::DisclosureItem;
use dioxus::prelude::*;
use microservices_atlas_engine::{DisclosureGroup as DisclosureGroupData, EntryId, GroupSelection};

/// Accordion over a group's entries; `selection` decides which one is open
#[component]
pub fn DisclosureGroup(
    group: DisclosureGroupData,
    selection: GroupSelection,
    label: Option<String>,
    on_toggle: EventHandler<EntryId>,
) -> Element {
    rsx! {
        section {
            class: "disclosure-group",
            if let Some(ref label) = label {
                h3 { class: "disclosure-group-label", "{label}" }
            }
            for (index, (entry, is_open)) in group.items(&selection).enumerate() {
                DisclosureItem {
                    key: "{index}-{entry.id}",
                    entry: entry.clone(),
                    is_open,
                    on_toggle,
                }
            }
        }
    }
}
