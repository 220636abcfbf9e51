use super::{Page, SlotId};
use crate::disclosure::{DisclosureGroup, EntryId, GroupSelection, Transition};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("page has no disclosure slot '{0}'")]
    UnknownSlot(SlotId),
}

/// Selection state of every disclosure slot on one mounted page.
///
/// Each page instance owns its own container; slots never share a
/// selection, so toggling one group leaves every other group untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    slots: BTreeMap<SlotId, GroupSelection>,
}

impl PageState {
    /// Fresh-mount state: every slot closed
    pub fn for_page(page: &Page) -> Self {
        Self {
            slots: page
                .slots()
                .iter()
                .map(|slot| (slot.id.clone(), GroupSelection::closed()))
                .collect(),
        }
    }

    pub fn selection(&self, slot: &SlotId) -> Option<&GroupSelection> {
        self.slots.get(slot)
    }

    pub fn open_id(&self, slot: &SlotId) -> Option<&EntryId> {
        self.slots.get(slot).and_then(GroupSelection::open_id)
    }

    pub fn is_open(&self, slot: &SlotId, id: &EntryId) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|selection| selection.is_open(id))
    }

    pub fn is_all_closed(&self) -> bool {
        self.slots.values().all(GroupSelection::is_closed)
    }

    /// Toggle `id` in `slot`.
    ///
    /// `Ok(None)` means the id is not an entry of that slot and nothing changed.
    pub fn toggle(
        &mut self,
        page: &Page,
        slot: &SlotId,
        id: &EntryId,
    ) -> Result<Option<Transition>, StateError> {
        let Some(definition) = page.slot(slot) else {
            return Err(StateError::UnknownSlot(slot.clone()));
        };
        self.toggle_group(slot, &definition.group, id)
    }

    /// Same as [`PageState::toggle`] for callers that hold the slot's group
    /// but not the whole page.
    pub fn toggle_group(
        &mut self,
        slot: &SlotId,
        group: &DisclosureGroup,
        id: &EntryId,
    ) -> Result<Option<Transition>, StateError> {
        let selection = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| StateError::UnknownSlot(slot.clone()))?;
        Ok(group.toggle(selection, id))
    }

    pub fn reset(&mut self) {
        self.slots.values_mut().for_each(GroupSelection::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageSource;
    use pretty_assertions::assert_eq;

    fn page() -> Page {
        let source: PageSource = toml::from_str(
            r#"
slug = "service-mesh"
title = "Service Mesh"

[[slots]]
id = "faq"
[[slots.entries]]
id = 1
title = "Sidecar or ambient?"
[[slots.entries]]
id = 2
title = "Does it replace the gateway?"

[[slots]]
id = "modules"
[[slots.entries]]
id = 1
title = "Traffic management"
[[slots.entries]]
id = 2
title = "mTLS"
[[slots.entries]]
id = 3
title = "Telemetry"

[[slots]]
id = "legacy"
shared_ids = true
[[slots.entries]]
id = "x"
title = "First x"
[[slots.entries]]
id = "x"
title = "Second x"
"#,
        )
        .unwrap();
        Page::from_source(source).unwrap()
    }

    fn slot(id: &str) -> SlotId {
        SlotId::new(id).unwrap()
    }

    #[test]
    fn test_initial_state_all_closed() {
        let state = PageState::for_page(&page());

        assert!(state.is_all_closed());
        for id in ["faq", "modules", "legacy"] {
            assert_eq!(state.open_id(&slot(id)), None);
        }
    }

    #[test]
    fn test_groups_are_independent() {
        let page = page();
        let mut state = PageState::for_page(&page);

        state
            .toggle(&page, &slot("faq"), &EntryId::from(2))
            .unwrap();
        state
            .toggle(&page, &slot("modules"), &EntryId::from(1))
            .unwrap();

        assert_eq!(state.open_id(&slot("faq")), Some(&EntryId::from(2)));
        assert_eq!(state.open_id(&slot("modules")), Some(&EntryId::from(1)));

        // Closing one group leaves the other open
        state
            .toggle(&page, &slot("modules"), &EntryId::from(1))
            .unwrap();
        assert_eq!(state.open_id(&slot("faq")), Some(&EntryId::from(2)));
        assert_eq!(state.open_id(&slot("modules")), None);
    }

    #[test]
    fn test_same_entry_id_in_two_slots_does_not_alias() {
        let page = page();
        let mut state = PageState::for_page(&page);

        state
            .toggle(&page, &slot("faq"), &EntryId::from(1))
            .unwrap();

        assert!(state.is_open(&slot("faq"), &EntryId::from(1)));
        assert!(!state.is_open(&slot("modules"), &EntryId::from(1)));
    }

    #[test]
    fn test_unknown_slot_is_an_error() {
        let page = page();
        let mut state = PageState::for_page(&page);

        let result = state.toggle(&page, &slot("glossary"), &EntryId::from(1));

        assert_eq!(result, Err(StateError::UnknownSlot(slot("glossary"))));
        assert!(state.is_all_closed());
    }

    #[test]
    fn test_unknown_entry_is_a_no_op() {
        let page = page();
        let mut state = PageState::for_page(&page);

        let result = state.toggle(&page, &slot("faq"), &EntryId::from(99));

        assert_eq!(result, Ok(None));
        assert!(state.is_all_closed());
    }

    #[test]
    fn test_shared_ids_both_render_open() {
        let page = page();
        let mut state = PageState::for_page(&page);
        let legacy = slot("legacy");

        state.toggle(&page, &legacy, &EntryId::from("x")).unwrap();

        let selection = state.selection(&legacy).unwrap();
        let group = &page.slot(&legacy).unwrap().group;
        let open: Vec<_> = group
            .items(selection)
            .filter(|(_, open)| *open)
            .map(|(entry, _)| entry.header.title.as_str())
            .collect();
        assert_eq!(open, vec!["First x", "Second x"]);
    }

    #[test]
    fn test_reset_returns_to_fresh_mount() {
        let page = page();
        let mut state = PageState::for_page(&page);
        state
            .toggle(&page, &slot("faq"), &EntryId::from(1))
            .unwrap();
        state
            .toggle(&page, &slot("modules"), &EntryId::from(3))
            .unwrap();

        state.reset();

        assert_eq!(state, PageState::for_page(&page));
    }
}
