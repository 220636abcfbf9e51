use crate::ui::components::page_nav_item::{PageLink, PageNavItem};
use dioxus::events::KeyboardEvent;
use dioxus::html::Key;
use dioxus::prelude::*;

#[component]
pub fn PageNav(links: Vec<PageLink>, selected: usize, on_select: EventHandler<usize>) -> Element {
    let mut focused_index = use_signal(|| selected);
    let mut has_focus = use_signal(|| false);

    // Clicking a page moves keyboard focus with it
    let select = move |index: usize| {
        focused_index.set(index);
        on_select.call(index);
    };

    let link_count = links.len();
    let handle_keydown = move |evt: KeyboardEvent| {
        handle_nav_keys(
            evt,
            *has_focus.read(),
            link_count,
            &mut focused_index,
            &on_select,
        );
    };

    rsx! {
        div {
            class: "page-nav",
            tabindex: "0",
            onkeydown: handle_keydown,
            onfocus: move |_| has_focus.set(true),
            onblur: move |_| has_focus.set(false),
            for (index, link) in links.iter().enumerate() {
                PageNavItem {
                    key: "{link.slug}",
                    link: link.clone(),
                    index,
                    is_selected: index == selected,
                    is_focused: index == *focused_index.read() && *has_focus.read(),
                    on_select: select,
                }
            }
        }
    }
}

/// Arrow keys move between pages and open the page they land on
fn handle_nav_keys(
    evt: KeyboardEvent,
    has_focus: bool,
    link_count: usize,
    focused_index: &mut Signal<usize>,
    on_select: &EventHandler<usize>,
) {
    if !has_focus || link_count == 0 {
        return;
    }

    let current_index = *focused_index.read();
    let new_index = match evt.key() {
        Key::ArrowDown => (current_index + 1).min(link_count - 1),
        Key::ArrowUp => current_index.saturating_sub(1),
        Key::Home => 0,
        Key::End => link_count - 1,
        _ => return,
    };

    evt.prevent_default(); // Prevent scrolling
    focused_index.set(new_index);
    on_select.call(new_index);
}
