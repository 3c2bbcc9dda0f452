//! Quick-recall location slots.

/// Number of hot slots.
pub const HOT_SLOT_COUNT: usize = 4;

/// Four independently settable location slots.
///
/// Indices outside `0..4`, negative ones included, fall back to slot 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotSlots {
    slots: [Option<String>; HOT_SLOT_COUNT],
}

impl HotSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps any requested index onto a valid slot.
    #[must_use]
    pub fn normalize(index: i64) -> usize {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < HOT_SLOT_COUNT)
            .unwrap_or(0)
    }

    /// Stores `location` and returns the slot actually used.
    pub fn set(&mut self, index: i64, location: impl Into<String>) -> usize {
        let slot = Self::normalize(index);
        self.slots[slot] = Some(location.into());
        slot
    }

    /// Location stored in the slot, if any.
    #[must_use]
    pub fn get(&self, index: i64) -> Option<&str> {
        self.slots[Self::normalize(index)].as_deref()
    }
}
