use super::slot::{DisclosureSlot, SlotId, is_kebab_case};
use crate::content::Block;
use crate::disclosure::{DisclosureEntry, DisclosureGroup, EntryId, GroupError};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("page slug '{0}' must be lowercase words joined by '-'")]
    InvalidSlug(String),

    #[error("page '{0}' has an empty title")]
    MissingTitle(String),

    #[error("disclosure slot '{0}' is declared more than once")]
    DuplicateSlot(SlotId),

    #[error("section refers to undeclared disclosure slot '{0}'")]
    UnknownSlot(SlotId),

    #[error("disclosure slot '{0}' is placed on the page more than once")]
    SlotPlacedTwice(SlotId),

    #[error("entry '{entry}' in slot '{slot}' nests another disclosure group")]
    NestedDisclosure { slot: SlotId, entry: EntryId },

    #[error("slot '{slot}': {source}")]
    Group {
        slot: SlotId,
        #[source]
        source: GroupError,
    },
}

/// Page as authored, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct PageSource {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub slots: Vec<SlotSource>,
    #[serde(default)]
    pub sections: Vec<Block>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotSource {
    pub id: SlotId,
    #[serde(default)]
    pub label: Option<String>,
    /// Accept duplicate entry ids; duplicates then open and close together
    #[serde(default)]
    pub shared_ids: bool,
    #[serde(default)]
    pub entries: Vec<DisclosureEntry>,
}

/// A validated article: static sections plus the disclosure slots they place.
///
/// Every slot appears exactly once among the sections, and entry bodies
/// never contain a further disclosure group.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    slug: String,
    title: String,
    summary: Option<String>,
    slots: Vec<DisclosureSlot>,
    sections: Vec<Block>,
}

impl Page {
    pub fn from_source(source: PageSource) -> Result<Self, PageError> {
        if !is_kebab_case(&source.slug) {
            return Err(PageError::InvalidSlug(source.slug));
        }
        if source.title.trim().is_empty() {
            return Err(PageError::MissingTitle(source.slug));
        }

        let mut slots = Vec::with_capacity(source.slots.len());
        for slot in source.slots {
            if slots.iter().any(|s: &DisclosureSlot| s.id == slot.id) {
                return Err(PageError::DuplicateSlot(slot.id));
            }
            slots.push(build_slot(slot)?);
        }

        let mut sections = source.sections;
        let mut placed = HashSet::new();
        for block in &sections {
            if let Block::Disclosure { slot } = block {
                if !slots.iter().any(|s| s.id == *slot) {
                    return Err(PageError::UnknownSlot(slot.clone()));
                }
                if !placed.insert(slot.clone()) {
                    return Err(PageError::SlotPlacedTwice(slot.clone()));
                }
            }
        }

        // Declared but unplaced slots go after the authored sections, in declaration order
        for slot in &slots {
            if !placed.contains(&slot.id) {
                log::debug!(
                    "page '{}': appending unplaced slot '{}'",
                    source.slug,
                    slot.id
                );
                sections.push(Block::Disclosure {
                    slot: slot.id.clone(),
                });
            }
        }

        Ok(Self {
            slug: source.slug,
            title: source.title,
            summary: source.summary.filter(|s| !s.trim().is_empty()),
            slots,
            sections,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn slots(&self) -> &[DisclosureSlot] {
        &self.slots
    }

    pub fn slot(&self, id: &SlotId) -> Option<&DisclosureSlot> {
        self.slots.iter().find(|slot| slot.id == *id)
    }

    pub fn sections(&self) -> &[Block] {
        &self.sections
    }
}

fn build_slot(source: SlotSource) -> Result<DisclosureSlot, PageError> {
    for entry in &source.entries {
        if entry.body.iter().any(Block::is_disclosure) {
            return Err(PageError::NestedDisclosure {
                slot: source.id,
                entry: entry.id.clone(),
            });
        }
    }

    let group = if source.shared_ids {
        DisclosureGroup::with_shared_ids(source.entries)
    } else {
        DisclosureGroup::new(source.entries).map_err(|e| PageError::Group {
            slot: source.id.clone(),
            source: e,
        })?
    };

    Ok(DisclosureSlot {
        id: source.id,
        label: source.label.filter(|l| !l.trim().is_empty()),
        group,
    })
}
