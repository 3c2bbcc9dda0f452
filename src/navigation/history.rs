//! Back-navigation history.
//!
//! A fixed-capacity ring buffer of visited locations. The host reports every
//! directory change through [`History::visit`]; the pop command walks backwards
//! through it with [`History::pop_back`].
//!
//! Repeated pops accumulate: each successful pop remembers how far back it went,
//! so popping again continues from there. Any ordinary visit resets the walk.
//! The navigation caused by a pop is reported back by the host like any other
//! directory change, so the visit right after a pop is swallowed.

/// Default number of remembered locations.
pub const DEFAULT_CAPACITY: usize = 10;

/// Ring buffer of recently visited locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    slots: Vec<Option<String>>,
    /// Slot holding the most recent visit.
    cursor: usize,
    /// Visits recorded so far, saturating at capacity.
    recorded: usize,
    /// How far back previous pops have already walked.
    steps_back: usize,
    /// Set by a successful pop; swallows the next visit.
    suppress_next: bool,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    /// Creates an empty history. A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![None; capacity],
            cursor: capacity - 1,
            recorded: 0,
            steps_back: 0,
            suppress_next: false,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of locations currently remembered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recorded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    /// The most recently recorded location.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.slots[self.cursor].as_deref()
    }

    /// Records a directory change.
    ///
    /// Returns `false` when the visit was swallowed because it is the echo of a
    /// pop.
    pub fn visit(&mut self, location: impl Into<String>) -> bool {
        if self.suppress_next {
            self.suppress_next = false;
            tracing::trace!("visit suppressed after pop");
            return false;
        }

        self.cursor = (self.cursor + 1) % self.capacity();
        self.slots[self.cursor] = Some(location.into());
        self.recorded = (self.recorded + 1).min(self.capacity());
        self.steps_back = 0;
        true
    }

    /// Returns the location `steps` entries before the previous one.
    ///
    /// `pop_back(0)` is the location visited just before the current one. The
    /// offset adds to whatever earlier pops have already walked. Asking for more
    /// than the buffer remembers returns `None` and leaves the state untouched.
    /// Unless the target is the current location, the next visit is treated as
    /// the echo of this pop and swallowed.
    pub fn pop_back(&mut self, steps: usize) -> Option<String> {
        let total = self.steps_back.saturating_add(steps);
        let distance = total.checked_add(1)?;
        if distance >= self.recorded {
            tracing::debug!(steps = steps, total = total, recorded = self.recorded, "history exhausted");
            return None;
        }

        let capacity = self.capacity();
        let index = (self.cursor + capacity - distance % capacity) % capacity;
        let target = self.slots[index].clone()?;

        self.steps_back = distance;
        // No change event follows a navigation to where the pane already is.
        self.suppress_next = self.current() != Some(target.as_str());
        tracing::debug!(index = index, steps_back = self.steps_back, target = %target, "popped history");
        Some(target)
    }
}
