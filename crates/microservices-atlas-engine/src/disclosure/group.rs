use super::{DisclosureEntry, EntryId, GroupSelection, Transition};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroupError {
    #[error("duplicate entry id '{id}' in disclosure group")]
    DuplicateId { id: EntryId },
}

/// Ordered entries of one accordion, rendered in insertion order.
///
/// The group holds no selection of its own; the page owns a
/// [`GroupSelection`] per group and hands it in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisclosureGroup {
    entries: Vec<DisclosureEntry>,
}

impl DisclosureGroup {
    /// Build a group, rejecting entries whose ids collide.
    pub fn new(entries: Vec<DisclosureEntry>) -> Result<Self, GroupError> {
        if let Some(id) = first_duplicate(&entries) {
            return Err(GroupError::DuplicateId { id });
        }
        Ok(Self { entries })
    }

    /// Build a group without id validation.
    ///
    /// Entries sharing an id share open/closed state: toggling either one
    /// opens both.
    pub fn with_shared_ids(entries: Vec<DisclosureEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DisclosureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id == *id)
    }

    /// Each entry paired with whether it renders expanded under `selection`
    pub fn items<'a>(
        &'a self,
        selection: &'a GroupSelection,
    ) -> impl Iterator<Item = (&'a DisclosureEntry, bool)> + 'a {
        self.entries
            .iter()
            .map(move |entry| (entry, selection.is_open(&entry.id)))
    }

    /// Apply a header activation. Ids that are not part of this group leave
    /// the selection untouched and return `None`.
    pub fn toggle(&self, selection: &mut GroupSelection, id: &EntryId) -> Option<Transition> {
        if !self.contains(id) {
            return None;
        }
        Some(selection.toggle(id))
    }
}

fn first_duplicate(entries: &[DisclosureEntry]) -> Option<EntryId> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .find(|entry| !seen.insert(&entry.id))
        .map(|entry| entry.id.clone())
}
