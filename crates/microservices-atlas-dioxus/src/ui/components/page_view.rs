use crate::ui::components::{BlockView, DisclosureGroup};
use dioxus::prelude::*;
use microservices_atlas_engine::{Block, EntryId, Page, PageState, SlotId, Transition};

/// Composition root for one article.
///
/// Owns the selection state of every disclosure slot on the page. Mount it
/// keyed by slug so that opening another page starts from all-collapsed.
#[component]
pub fn PageView(page: Page) -> Element {
    let state = use_signal(|| PageState::for_page(&page));

    rsx! {
        article {
            class: "page",
            header {
                class: "page-header",
                h1 { "{page.title()}" }
                if let Some(summary) = page.summary() {
                    p { class: "page-summary", "{summary}" }
                }
            }
            {page.sections().iter().enumerate().map(|(index, block)| render_section(&page, state, index, block))}
        }
    }
}

fn render_section(page: &Page, state: Signal<PageState>, index: usize, block: &Block) -> Element {
    let Block::Disclosure { slot } = block else {
        return rsx! { BlockView { key: "{index}", block: block.clone() } };
    };

    let Some(definition) = page.slot(slot) else {
        log::warn!("page '{}' places unknown slot '{slot}'", page.slug());
        return rsx! {};
    };

    let selection = state.read().selection(slot).cloned().unwrap_or_default();
    let group = definition.group.clone();
    let on_toggle = make_toggle_handler(state, slot.clone(), group.clone());

    rsx! {
        DisclosureGroup {
            key: "{index}-{slot}",
            group,
            selection,
            label: definition.label.clone(),
            on_toggle,
        }
    }
}

fn make_toggle_handler(
    mut state: Signal<PageState>,
    slot: SlotId,
    group: microservices_atlas_engine::DisclosureGroup,
) -> impl FnMut(EntryId) {
    move |id: EntryId| {
        let result = state.write().toggle_group(&slot, &group, &id);
        match result {
            Ok(Some(Transition::Opened)) => log::debug!("{slot}: opened {id}"),
            Ok(Some(Transition::Closed)) => log::debug!("{slot}: closed {id}"),
            Ok(Some(Transition::Switched { from })) => {
                log::debug!("{slot}: switched {from} -> {id}")
            }
            Ok(None) => log::warn!("{slot}: ignoring toggle for unknown entry {id}"),
            Err(e) => log::warn!("{e}"),
        }
    }
}
