//! Commands issued by the presentation layer and the messages they produce.

use std::fmt;

use crate::registry::{
    parse_new_slot_number, parse_slot_number, InputField, RegistryError, Requirements,
    SlotNo, SlotRegistry,
};

/// A user action, with slot numbers still in their typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddSlot {
        slot_no: String,
        covered: bool,
        ev: bool,
    },
    Allocate {
        needs_covered: bool,
        needs_ev: bool,
    },
    Release {
        slot_no: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(SlotNo),
    Allocated(SlotNo),
    Released(SlotNo),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(n) => write!(f, "Success: Slot {} added successfully.", n),
            Outcome::Allocated(n) => write!(f, "Success: Vehicle parked at Slot {}", n),
            Outcome::Released(n) => write!(f, "Success: Vehicle removed from Slot {}.", n),
        }
    }
}

impl Command {
    /// Parses the command's input and applies it to `registry`.
    pub fn apply(&self, registry: &mut SlotRegistry) -> Result<Outcome, RegistryError> {
        let result = self.execute(registry);
        match &result {
            Ok(outcome) => tracing::info!(command = ?self, "{}", outcome),
            Err(err) => tracing::warn!(command = ?self, kind = err.kind(), "{}", err),
        }
        result
    }

    fn execute(&self, registry: &mut SlotRegistry) -> Result<Outcome, RegistryError> {
        match self {
            Command::AddSlot { slot_no, covered, ev } => {
                let slot_no = parse_new_slot_number(slot_no)?;
                registry.add(slot_no, *covered, *ev).map(Outcome::Added)
            }
            Command::Allocate {
                needs_covered,
                needs_ev,
            } => registry
                .allocate(Requirements {
                    needs_covered: *needs_covered,
                    needs_ev: *needs_ev,
                })
                .map(Outcome::Allocated),
            Command::Release { slot_no } => {
                let slot_no = parse_slot_number(slot_no, InputField::ReleaseSlot)?;
                registry.release(slot_no).map(Outcome::Released)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The latest result shown to the user. Each new one replaces the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl From<&Result<Outcome, RegistryError>> for StatusMessage {
    fn from(result: &Result<Outcome, RegistryError>) -> Self {
        match result {
            Ok(outcome) => StatusMessage::success(outcome.to_string()),
            Err(err) => StatusMessage::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(slot_no: &str) -> Command {
        Command::AddSlot {
            slot_no: slot_no.to_string(),
            covered: true,
            ev: false,
        }
    }

    #[test]
    fn add_then_duplicate() {
        let mut registry = SlotRegistry::new();
        let first = add("101").apply(&mut registry);
        assert_eq!(first, Ok(Outcome::Added(101)));
        assert!(StatusMessage::from(&first).text.contains("Slot 101 added"));

        let second = add("101").apply(&mut registry);
        assert_eq!(second, Err(RegistryError::DuplicateSlot(101)));
        assert!(StatusMessage::from(&second).is_error());
    }

    #[test]
    fn add_rejects_non_numeric_text() {
        let mut registry = SlotRegistry::new();
        let result = add("twelve").apply(&mut registry);
        assert_eq!(
            StatusMessage::from(&result),
            StatusMessage::error("Please enter a valid positive slot number.")
        );
    }

    #[test]
    fn release_rejects_empty_text() {
        let mut registry = SlotRegistry::new();
        let result = Command::Release {
            slot_no: String::new(),
        }
        .apply(&mut registry);
        assert_eq!(
            StatusMessage::from(&result).text,
            "Please enter a valid slot number."
        );
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            Outcome::Allocated(102).to_string(),
            "Success: Vehicle parked at Slot 102"
        );
        assert_eq!(
            Outcome::Released(5).to_string(),
            "Success: Vehicle removed from Slot 5."
        );
    }
}
