use dioxus::prelude::*;
use microservices_atlas_engine::CodeSnippet;

/// Read-only snippet with its language (or filename) label above the code
#[component]
pub fn CodeBlock(snippet: CodeSnippet) -> Element {
    let code_class = snippet.language_class();
    let label = snippet.label().to_string();

    rsx! {
        figure {
            class: "code-block",
            figcaption {
                class: "code-label",
                span { class: "code-language", "{snippet.language}" }
                if let Some(ref filename) = snippet.filename {
                    span { class: "code-filename", "{filename}" }
                }
            }
            pre {
                "aria-label": "{label}",
                code {
                    class: "{code_class}",
                    "{snippet.code}"
                }
            }
        }
    }
}
