use dioxus::prelude::*;

#[component]
pub fn EmptyLibrary(content_path: String) -> Element {
    rsx! {
        div {
            class: "empty-library",
            h1 { "microservices-atlas" }
            p { "No pages were found in {content_path}." }
            p { "Add a page definition (*.toml) to the content directory and restart." }
        }
    }
}
