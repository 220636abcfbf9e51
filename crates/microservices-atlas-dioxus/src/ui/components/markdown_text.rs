use dioxus::prelude::*;
use microservices_atlas_engine::markdown_to_html;

/// Authored prose. Content is trusted, so the rendered HTML is inserted as is.
#[component]
pub fn MarkdownText(markdown: String) -> Element {
    let html = markdown_to_html(&markdown);

    rsx! {
        div {
            class: "prose",
            dangerous_inner_html: "{html}",
        }
    }
}
