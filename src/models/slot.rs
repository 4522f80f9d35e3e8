use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::Time;
use tracing::warn;

use crate::models::wire;

/// A concrete bookable unit for one service on one requested date.
///
/// Produced transiently by the slot endpoint; a snapshot, not a
/// reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    #[serde(with = "wire::hms_time")]
    pub time: Time,
}

impl AvailableSlot {
    /// "HH:MM" label for slot buttons.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// Start times within one response must be distinct. Duplicates are a
/// backend data error; keep the first occurrence and log the rest.
pub fn dedup_slot_times(slots: Vec<AvailableSlot>) -> Vec<AvailableSlot> {
    let mut seen: HashSet<Time> = HashSet::with_capacity(slots.len());
    let mut unique = Vec::with_capacity(slots.len());
    for slot in slots {
        if seen.insert(slot.time) {
            unique.push(slot);
        } else {
            warn!(slot = %slot.label(), "Duplicate start time in slot response");
        }
    }
    unique
}
