//! Cascading project → member choice.
//!
//! All changes go through [`Selection::apply`], the single place where the
//! dependent-selection rule is enforced: whenever the project is set, the
//! member is cleared, even if the new project is the same as the old one.

/// Inputs to the selection state machine.
///
/// An empty id is the "nothing chosen" sentinel a picker reports before the
/// user makes a choice; it is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Project(String),
    Member(String),
    Clear,
}

/// What a transition changed, so callers can react (e.g. leave the success
/// screen when a new project is picked).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The project was (re)set and the member cleared.
    Project,
    /// Only the member changed.
    Member,
    /// Both were cleared.
    Cleared,
}

/// The current project and member ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    project_id: Option<String>,
    member_id: Option<String>,
}

fn non_empty(id: String) -> Option<String> {
    (!id.is_empty()).then_some(id)
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref()
    }

    /// Whether both a project and a member are chosen.
    pub fn is_complete(&self) -> bool {
        self.project_id.is_some() && self.member_id.is_some()
    }

    /// Apply one event. Total over all ids; membership of the member in the
    /// project is not checked here, the picker only offers valid members.
    pub fn apply(&mut self, event: SelectionEvent) -> SelectionChange {
        match event {
            SelectionEvent::Project(id) => {
                self.project_id = non_empty(id);
                self.member_id = None;
                SelectionChange::Project
            }
            SelectionEvent::Member(id) => {
                self.member_id = non_empty(id);
                SelectionChange::Member
            }
            SelectionEvent::Clear => {
                self.project_id = None;
                self.member_id = None;
                SelectionChange::Cleared
            }
        }
    }

    pub fn select_project(&mut self, id: impl Into<String>) -> SelectionChange {
        self.apply(SelectionEvent::Project(id.into()))
    }

    pub fn select_member(&mut self, id: impl Into<String>) -> SelectionChange {
        self.apply(SelectionEvent::Member(id.into()))
    }

    pub fn clear(&mut self) -> SelectionChange {
        self.apply(SelectionEvent::Clear)
    }
}
