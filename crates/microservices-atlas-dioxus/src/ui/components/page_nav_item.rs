use dioxus::prelude::*;

/// Sidebar entry for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub slug: String,
    pub title: String,
}

#[component]
pub fn PageNavItem(
    link: PageLink,
    index: usize,
    is_selected: bool,
    is_focused: bool,
    on_select: EventHandler<usize>,
) -> Element {
    let classes = match (is_selected, is_focused) {
        (true, true) => "nav-item selected focused",
        (true, false) => "nav-item selected",
        (false, true) => "nav-item focused",
        (false, false) => "nav-item",
    };

    rsx! {
        div {
            class: "{classes}",
            "data-slug": "{link.slug}",
            onclick: move |_| on_select.call(index),
            span {
                class: "nav-label",
                "{link.title}"
            }
        }
    }
}
