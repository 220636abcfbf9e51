//! Pages: the composition roots that place disclosure slots, code and cards.

pub mod document;
pub mod library;
pub mod slot;
pub mod state;

pub use document::{Page, PageError, PageSource, SlotSource};
pub use library::{LibraryError, PageLibrary};
pub use slot::{DisclosureSlot, InvalidIdentifier, SlotId, is_kebab_case};
pub use state::{PageState, StateError};
