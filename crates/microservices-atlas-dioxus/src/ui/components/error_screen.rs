use dioxus::prelude::*;

/// Full-window message shown when the site content cannot be loaded
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre {
                    class: "error-details",
                    "{detail_text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Content error".to_string(),
                message: "No pages could be loaded".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Content error"));
        assert!(html.contains("No pages could be loaded"));
        assert!(!html.contains("error-details"));
    }

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Content error".to_string(),
                message: "Failed to load pages".to_string(),
                details: Some("Invalid page faq.toml: slot faq has duplicate entries".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Failed to load pages"));
        assert!(html.contains("Invalid page faq.toml: slot faq has duplicate entries"));
    }
}
