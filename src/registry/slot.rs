use serde::Serialize;

/// Slot numbers are positive and unique within a registry.
pub type SlotNo = u32;

/// A single parking space.
///
/// `covered` and `ev_charging` are fixed when the slot is added;
/// `occupied` is the only field the registry ever changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub slot_no: SlotNo,
    pub covered: bool,
    pub ev_charging: bool,
    pub occupied: bool,
}

impl Slot {
    pub fn new(slot_no: SlotNo, covered: bool, ev_charging: bool) -> Self {
        Self {
            slot_no,
            covered,
            ev_charging,
            occupied: false,
        }
    }

    /// True if the slot is free and offers every requested amenity.
    pub fn satisfies(&self, requirements: Requirements) -> bool {
        !self.occupied
            && (!requirements.needs_ev || self.ev_charging)
            && (!requirements.needs_covered || self.covered)
    }

    pub fn status_label(&self) -> &'static str {
        if self.occupied {
            "Occupied"
        } else {
            "Available"
        }
    }
}

/// Amenities an arriving vehicle insists on. Both are hard filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub needs_covered: bool,
    pub needs_ev: bool,
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
