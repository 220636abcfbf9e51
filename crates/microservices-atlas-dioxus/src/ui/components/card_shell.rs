use dioxus::prelude::*;
use microservices_atlas_engine::CardKind;

/// Common layout every card variant renders through
#[component]
pub fn CardShell(
    kind: CardKind,
    title: String,
    description: String,
    items: Vec<String>,
    icon: Option<String>,
    badge: Option<String>,
    modifier: Option<String>,
) -> Element {
    let kind_class = kind.as_str();
    let classes = match modifier {
        Some(ref modifier) => format!("card card-{kind_class} {modifier}"),
        None => format!("card card-{kind_class}"),
    };

    rsx! {
        div {
            class: "{classes}",
            div {
                class: "card-header",
                if let Some(ref icon) = icon {
                    span { class: "card-icon", "{icon}" }
                }
                if let Some(ref badge) = badge {
                    span { class: "card-badge", "{badge}" }
                }
                h4 { class: "card-title", "{title}" }
            }
            if !description.is_empty() {
                p { class: "card-description", "{description}" }
            }
            if !items.is_empty() {
                ul {
                    class: "card-items",
                    for (index, item) in items.iter().enumerate() {
                        li { key: "{index}", "{item}" }
                    }
                }
            }
        }
    }
}
