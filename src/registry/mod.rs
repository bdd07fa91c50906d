//! In-memory registry of parking slots.
//!
//! The registry is owned by whoever drives the user interface and is
//! mutated only through [`SlotRegistry::add`], [`SlotRegistry::allocate`]
//! and [`SlotRegistry::release`]. Each call either applies fully or leaves
//! the registry untouched.

mod error;
mod slot;

pub use error::{InputField, RegistryError};
pub use slot::{yes_no, Requirements, Slot, SlotNo};

use std::collections::BTreeMap;
use std::num::IntErrorKind;

/// Occupancy counts shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotRegistry {
    // Keyed by slot number: uniqueness and ascending order come for free.
    slots: BTreeMap<SlotNo, Slot>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a free slot.
    ///
    /// Rejects `0` with `InvalidInput` and an existing number with
    /// `DuplicateSlot`.
    pub fn add(
        &mut self,
        slot_no: SlotNo,
        covered: bool,
        ev_charging: bool,
    ) -> Result<SlotNo, RegistryError> {
        if slot_no == 0 {
            return Err(RegistryError::InvalidInput {
                field: InputField::AddSlot,
                input: slot_no.to_string(),
            });
        }
        if self.slots.contains_key(&slot_no) {
            return Err(RegistryError::DuplicateSlot(slot_no));
        }
        self.slots
            .insert(slot_no, Slot::new(slot_no, covered, ev_charging));
        Ok(slot_no)
    }

    /// Occupies the lowest-numbered free slot that meets every requirement.
    pub fn allocate(&mut self, requirements: Requirements) -> Result<SlotNo, RegistryError> {
        let slot = self
            .slots
            .values_mut()
            .find(|slot| slot.satisfies(requirements))
            .ok_or(RegistryError::NoSlotAvailable)?;
        slot.occupied = true;
        Ok(slot.slot_no)
    }

    /// Frees an occupied slot.
    ///
    /// Takes a signed number so that any parsed integer can be looked up;
    /// numbers outside the slot range are simply not found.
    pub fn release(&mut self, slot_no: i64) -> Result<SlotNo, RegistryError> {
        let slot = SlotNo::try_from(slot_no)
            .ok()
            .and_then(|key| self.slots.get_mut(&key))
            .ok_or_else(|| RegistryError::SlotNotFound(slot_no.to_string()))?;
        if !slot.occupied {
            return Err(RegistryError::AlreadyEmpty(slot.slot_no));
        }
        slot.occupied = false;
        Ok(slot.slot_no)
    }

    /// All slots, ascending by slot number.
    pub fn list(&self) -> Vec<Slot> {
        self.slots.values().copied().collect()
    }

    pub fn get(&self, slot_no: SlotNo) -> Option<&Slot> {
        self.slots.get(&slot_no)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let occupied = self.slots.values().filter(|slot| slot.occupied).count();
        Summary {
            total: self.slots.len(),
            available: self.slots.len() - occupied,
            occupied,
        }
    }
}

/// Parses a slot number typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a plain decimal
/// integer is rejected as `InvalidInput` for `field`. On the remove form a
/// well-formed integer too large for `i64` can never name a slot, so it is
/// `SlotNotFound` instead.
pub fn parse_slot_number(raw: &str, field: InputField) -> Result<i64, RegistryError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|err| match (field, err.kind()) {
        (InputField::ReleaseSlot, IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            RegistryError::SlotNotFound(trimmed.to_string())
        }
        _ => RegistryError::InvalidInput {
            field,
            input: raw.to_string(),
        },
    })
}

/// Parses a slot number for the add form: must fit a positive [`SlotNo`].
pub fn parse_new_slot_number(raw: &str) -> Result<SlotNo, RegistryError> {
    let value = parse_slot_number(raw, InputField::AddSlot)?;
    match SlotNo::try_from(value) {
        Ok(slot_no) if slot_no > 0 => Ok(slot_no),
        _ => Err(RegistryError::InvalidInput {
            field: InputField::AddSlot,
            input: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev() -> Requirements {
        Requirements {
            needs_covered: false,
            needs_ev: true,
        }
    }

    #[test]
    fn add_rejects_zero() {
        let mut registry = SlotRegistry::new();
        assert!(matches!(
            registry.add(0, false, false),
            Err(RegistryError::InvalidInput { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_add_leaves_first_slot_untouched() {
        let mut registry = SlotRegistry::new();
        registry.add(101, true, false).unwrap();
        assert_eq!(
            registry.add(101, false, true),
            Err(RegistryError::DuplicateSlot(101))
        );
        let slot = registry.get(101).unwrap();
        assert!(slot.covered);
        assert!(!slot.ev_charging);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn allocate_picks_lowest_matching_slot() {
        let mut registry = SlotRegistry::new();
        registry.add(30, false, true).unwrap();
        registry.add(10, false, false).unwrap();
        registry.add(20, false, true).unwrap();
        assert_eq!(registry.allocate(ev()), Ok(20));
        assert_eq!(registry.allocate(ev()), Ok(30));
        assert_eq!(registry.allocate(ev()), Err(RegistryError::NoSlotAvailable));
        assert_eq!(registry.allocate(Requirements::default()), Ok(10));
    }

    #[test]
    fn release_negative_number_is_not_found() {
        let mut registry = SlotRegistry::new();
        registry.add(1, false, false).unwrap();
        assert_eq!(
            registry.release(-1),
            Err(RegistryError::SlotNotFound("-1".to_string()))
        );
    }

    #[test]
    fn release_number_beyond_i64_is_not_found() {
        for raw in ["99999999999999999999", " -99999999999999999999 "] {
            let err = parse_slot_number(raw, InputField::ReleaseSlot).unwrap_err();
            assert_eq!(err, RegistryError::SlotNotFound(raw.trim().to_string()));
        }
        assert_eq!(
            parse_slot_number("99999999999999999999", InputField::ReleaseSlot)
                .unwrap_err()
                .to_string(),
            "Error: Slot 99999999999999999999 does not exist."
        );
    }

    #[test]
    fn add_number_beyond_i64_is_invalid_input() {
        assert!(matches!(
            parse_new_slot_number("99999999999999999999"),
            Err(RegistryError::InvalidInput {
                field: InputField::AddSlot,
                ..
            })
        ));
    }

    #[test]
    fn summary_counts_occupancy() {
        let mut registry = SlotRegistry::new();
        registry.add(1, false, false).unwrap();
        registry.add(2, false, false).unwrap();
        registry.allocate(Requirements::default()).unwrap();
        assert_eq!(
            registry.summary(),
            Summary {
                total: 2,
                available: 1,
                occupied: 1,
            }
        );
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        assert_eq!(parse_new_slot_number(" 42 "), Ok(42));
        assert_eq!(parse_slot_number("-3", InputField::ReleaseSlot), Ok(-3));
    }

    #[test]
    fn parse_new_rejects_non_positive_and_garbage() {
        for raw in ["", "abc", "0", "-5", "4294967296", "1.5"] {
            assert!(
                matches!(
                    parse_new_slot_number(raw),
                    Err(RegistryError::InvalidInput {
                        field: InputField::AddSlot,
                        ..
                    })
                ),
                "{raw:?} should be rejected"
            );
        }
    }
}
