//! State for the three form cards.

use crate::command::Command;
use crate::ui::mvi::UiState;

/// Form cards, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    AddSlot,
    Park,
    Remove,
}

/// Focusable form controls in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    AddSlotNo,
    AddCovered,
    AddEv,
    AddSubmit,
    ParkCovered,
    ParkEv,
    ParkSubmit,
    RemoveSlotNo,
    RemoveSubmit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Button,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::AddSlotNo,
        Field::AddCovered,
        Field::AddEv,
        Field::AddSubmit,
        Field::ParkCovered,
        Field::ParkEv,
        Field::ParkSubmit,
        Field::RemoveSlotNo,
        Field::RemoveSubmit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping from the last back to the first.
    pub fn next(self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn card(self) -> Card {
        match self {
            Field::AddSlotNo | Field::AddCovered | Field::AddEv | Field::AddSubmit => Card::AddSlot,
            Field::ParkCovered | Field::ParkEv | Field::ParkSubmit => Card::Park,
            Field::RemoveSlotNo | Field::RemoveSubmit => Card::Remove,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::AddSlotNo | Field::RemoveSlotNo => FieldKind::Text,
            Field::AddCovered | Field::AddEv | Field::ParkCovered | Field::ParkEv => {
                FieldKind::Checkbox
            }
            Field::AddSubmit | Field::ParkSubmit | Field::RemoveSubmit => FieldKind::Button,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub focused: Field,
    pub add_slot_no: String,
    pub add_covered: bool,
    pub add_ev: bool,
    pub park_covered: bool,
    pub park_ev: bool,
    pub remove_slot_no: String,
}

impl UiState for FormState {}

impl FormState {
    /// Builds the command a submit on `card` would issue.
    pub fn command_for(&self, card: Card) -> Command {
        match card {
            Card::AddSlot => Command::AddSlot {
                slot_no: self.add_slot_no.clone(),
                covered: self.add_covered,
                ev: self.add_ev,
            },
            Card::Park => Command::Allocate {
                needs_covered: self.park_covered,
                needs_ev: self.park_ev,
            },
            Card::Remove => Command::Release {
                slot_no: self.remove_slot_no.clone(),
            },
        }
    }

    pub fn checkbox(&self, field: Field) -> bool {
        match field {
            Field::AddCovered => self.add_covered,
            Field::AddEv => self.add_ev,
            Field::ParkCovered => self.park_covered,
            Field::ParkEv => self.park_ev,
            _ => false,
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::AddSlotNo => &self.add_slot_no,
            Field::RemoveSlotNo => &self.remove_slot_no,
            _ => "",
        }
    }
}
