use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{Field, FormState};
use crate::ui::mvi::Reducer;

/// Longest accepted slot number input, sign included.
pub const MAX_SLOT_INPUT_LEN: usize = 11;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FocusNext => state.focused = state.focused.next(),
            FormIntent::FocusPrev => state.focused = state.focused.prev(),
            FormIntent::Focus(field) => state.focused = field,
            FormIntent::InsertChar(ch) => {
                if ch.is_ascii_digit() || ch == '-' {
                    if let Some(text) = text_mut(&mut state) {
                        if text.len() < MAX_SLOT_INPUT_LEN {
                            text.push(ch);
                        }
                    }
                }
            }
            FormIntent::Backspace => {
                if let Some(text) = text_mut(&mut state) {
                    text.pop();
                }
            }
            FormIntent::Toggle => match state.focused {
                Field::AddCovered => state.add_covered = !state.add_covered,
                Field::AddEv => state.add_ev = !state.add_ev,
                Field::ParkCovered => state.park_covered = !state.park_covered,
                Field::ParkEv => state.park_ev = !state.park_ev,
                _ => {}
            },
            FormIntent::ResetAdd => {
                state.add_slot_no.clear();
                state.add_covered = false;
                state.add_ev = false;
            }
            FormIntent::ResetRemove => state.remove_slot_no.clear(),
        }
        state
    }
}

fn text_mut(state: &mut FormState) -> Option<&mut String> {
    match state.focused {
        Field::AddSlotNo => Some(&mut state.add_slot_no),
        Field::RemoveSlotNo => Some(&mut state.remove_slot_no),
        _ => None,
    }
}
