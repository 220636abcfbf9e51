use super::EntryId;

/// What a single toggle did to a group's selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing was open; the toggled id is now open
    Opened,
    /// The toggled id was open and is now closed
    Closed,
    /// `from` was open; the toggled id replaced it in one step
    Switched { from: EntryId },
}

/// Single-select state of one disclosure slot.
///
/// States are `closed` or `open(id)`. Every mutation goes through
/// [`GroupSelection::toggle`], which never passes through a state with two
/// open entries, or through an all-closed state when switching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSelection {
    open: Option<EntryId>,
}

impl GroupSelection {
    /// Initial state: nothing open
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open_id(&self) -> Option<&EntryId> {
        self.open.as_ref()
    }

    pub fn is_open(&self, id: &EntryId) -> bool {
        self.open.as_ref() == Some(id)
    }

    pub fn is_closed(&self) -> bool {
        self.open.is_none()
    }

    pub fn toggle(&mut self, id: &EntryId) -> Transition {
        match self.open.replace(id.clone()) {
            None => Transition::Opened,
            Some(previous) if previous == *id => {
                self.open = None;
                Transition::Closed
            }
            Some(previous) => Transition::Switched { from: previous },
        }
    }

    /// Back to the initial state, as on a fresh mount
    pub fn reset(&mut self) {
        self.open = None;
    }
}
