//! UI components for the entry page.

pub mod choice_buttons;
pub mod join_form;
pub mod name_field;

pub use choice_buttons::ChoiceButtons;
pub use join_form::JoinForm;
pub use name_field::NameField;

/// Stable element ids of the entry form.
pub const NAME_FORM_ID: &str = "name-form";
pub const NAME_INPUT_ID: &str = "name-input";
pub const CREATE_BUTTON_ID: &str = "create-button";
pub const JOIN_BUTTON_ID: &str = "join-button";
pub const JOIN_FORM_ID: &str = "join-form";
pub const ROOM_CODE_INPUT_ID: &str = "room-code-input";
