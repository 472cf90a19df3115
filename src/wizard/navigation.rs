//! Step navigation
//!
//! Tracks the current and previous step index. Every successful move records
//! the old index as `previous`, which drives the animation direction and the
//! "edit from confirm, then return" shortcut.

use super::steps::StepSequence;

/// Current/previous position in a [`StepSequence`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCursor {
    current: usize,
    previous: usize,
}

impl StepCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Move to `index`. Returns `false` and leaves the cursor untouched when
    /// `index` is out of range or already current.
    pub fn navigate_to_step(&mut self, steps: &StepSequence, index: usize) -> bool {
        if index >= steps.len() || index == self.current {
            return false;
        }
        self.previous = self.current;
        self.current = index;
        true
    }

    pub fn navigate_to_previous(&mut self, steps: &StepSequence) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.navigate_to_step(steps, index),
            None => false,
        }
    }

    /// Advance one step, or jump straight back to Confirm when the user came
    /// from Confirm to edit something.
    pub fn navigate_to_next(&mut self, steps: &StepSequence) -> bool {
        if self.current >= steps.last_index() {
            return false;
        }

        let confirm_index = steps.confirm_index();
        if self.previous == confirm_index {
            return self.navigate_to_step(steps, confirm_index);
        }

        self.navigate_to_step(steps, self.current + 1)
    }

    /// Jump to the first step without touching `previous`
    pub fn reset_to_start(&mut self) {
        self.current = 0;
    }

    /// Pull the cursor back inside a sequence that shrank
    pub fn clamp_to(&mut self, steps: &StepSequence) {
        let last = steps.last_index();
        self.current = self.current.min(last);
        self.previous = self.previous.min(last);
    }
}
