//! Which part of the entry form is visible.

/// Entry form view.
///
/// `Choice` shows the create/join buttons. `JoinCode` hides them and shows
/// the room-code form. There is no way back to `Choice` short of reloading
/// the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryView {
    #[default]
    Choice,
    JoinCode,
}

impl EntryView {
    pub fn shows_choice(self) -> bool {
        self == Self::Choice
    }

    pub fn shows_join_form(self) -> bool {
        self == Self::JoinCode
    }

    /// The view after the user asked to join. Idempotent.
    pub fn reveal_join(self) -> Self {
        Self::JoinCode
    }
}
