//! Step sequencing
//!
//! The participants step is skipped when the report already names its
//! participants. The sequence is memoized on the participant count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wizard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Amount,
    Participants,
    Confirm,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Amount => write!(f, "amount"),
            Step::Participants => write!(f, "participants"),
            Step::Confirm => write!(f, "confirm"),
        }
    }
}

const KNOWN_PARTICIPANTS: &[Step] = &[Step::Amount, Step::Confirm];
const CHOOSE_PARTICIPANTS: &[Step] = &[Step::Amount, Step::Participants, Step::Confirm];

/// Ordered steps for the current report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: &'static [Step],
    participant_count: usize,
}

impl StepSequence {
    pub fn for_participant_count(participant_count: usize) -> Self {
        let steps = if participant_count > 0 {
            KNOWN_PARTICIPANTS
        } else {
            CHOOSE_PARTICIPANTS
        };
        Self {
            steps,
            participant_count,
        }
    }

    /// Recompute for a new participant count. Returns `false` when the count
    /// is unchanged and the memoized sequence was kept.
    pub fn refresh(&mut self, participant_count: usize) -> bool {
        if participant_count == self.participant_count {
            return false;
        }
        *self = Self::for_participant_count(participant_count);
        true
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Step> {
        self.steps.get(index).copied()
    }

    pub fn index_of(&self, step: Step) -> Option<usize> {
        self.steps.iter().position(|s| *s == step)
    }

    pub fn amount_index(&self) -> usize {
        0
    }

    pub fn confirm_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn as_slice(&self) -> &[Step] {
        self.steps
    }

    pub fn participant_count(&self) -> usize {
        self.participant_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_participants_skip_selection() {
        for count in [1, 2, 7] {
            let steps = StepSequence::for_participant_count(count);
            assert_eq!(steps.as_slice(), &[Step::Amount, Step::Confirm]);
            assert_eq!(steps.confirm_index(), 1);
        }
    }

    #[test]
    fn test_no_participants_includes_selection() {
        let steps = StepSequence::for_participant_count(0);
        assert_eq!(
            steps.as_slice(),
            &[Step::Amount, Step::Participants, Step::Confirm]
        );
        assert_eq!(steps.index_of(Step::Participants), Some(1));
        assert_eq!(steps.confirm_index(), 2);
    }

    #[test]
    fn test_refresh_is_memoized_on_count() {
        let mut steps = StepSequence::for_participant_count(2);
        assert!(!steps.refresh(2));
        assert!(steps.refresh(3));
        assert_eq!(steps.len(), 2);
        assert!(steps.refresh(0));
        assert_eq!(steps.len(), 3);
    }
}
