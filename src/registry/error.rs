use thiserror::Error;

use crate::registry::slot::SlotNo;

/// Which command the rejected slot number was typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Add form: the number must be a positive integer.
    AddSlot,
    /// Remove form: any integer is accepted, unknown ones are not found.
    ReleaseSlot,
}

impl InputField {
    pub fn message(&self) -> &'static str {
        match self {
            InputField::AddSlot => "Please enter a valid positive slot number.",
            InputField::ReleaseSlot => "Please enter a valid slot number.",
        }
    }
}

/// Recoverable rejections of registry operations.
///
/// Display strings are the messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{}", .field.message())]
    InvalidInput { field: InputField, input: String },

    #[error("Error: Slot number {0} already exists.")]
    DuplicateSlot(SlotNo),

    #[error("No slot available")]
    NoSlotAvailable,

    /// Holds the number as typed (trimmed), which may not fit any integer type.
    #[error("Error: Slot {0} does not exist.")]
    SlotNotFound(String),

    #[error("Error: Slot {0} is already empty.")]
    AlreadyEmpty(SlotNo),
}

impl RegistryError {
    /// Short kind name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::InvalidInput { .. } => "InvalidInput",
            RegistryError::DuplicateSlot(_) => "DuplicateSlot",
            RegistryError::NoSlotAvailable => "NoSlotAvailable",
            RegistryError::SlotNotFound(_) => "SlotNotFound",
            RegistryError::AlreadyEmpty(_) => "AlreadyEmpty",
        }
    }
}
