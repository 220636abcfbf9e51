//! Single-select disclosure (accordion) model.
//!
//! Entries are immutable content. Which entry is open lives in a
//! [`GroupSelection`] owned by whoever renders the group, so the entries
//! themselves carry no state.

pub mod entry;
pub mod group;
pub mod selection;

pub use entry::{DisclosureEntry, EntryHeader, EntryId};
pub use group::{DisclosureGroup, GroupError};
pub use selection::{GroupSelection, Transition};
