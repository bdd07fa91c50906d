use crate::ui::form::state::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    FocusNext,
    FocusPrev,
    Focus(Field),
    /// Typed character. Only digits and `-` reach slot number fields.
    InsertChar(char),
    Backspace,
    /// Flip the focused checkbox. No-op elsewhere.
    Toggle,
    /// Clear the add card after a slot was added.
    ResetAdd,
    /// Clear the remove card after a vehicle left.
    ResetRemove,
}

impl Intent for FormIntent {}
