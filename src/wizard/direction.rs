//! Transition direction for the step animation

use serde::{Deserialize, Serialize};

use super::steps::StepSequence;

/// Which way the incoming step slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    /// No animation, e.g. on mount
    None,
}

impl Direction {
    /// Glyph used by the terminal host
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Forward => "→",
            Direction::Backward => "←",
            Direction::None => "·",
        }
    }
}

/// Derive the direction of the move `previous -> current`.
///
/// Editing the amount from Confirm slides forward, and returning from that
/// edit slides backward, so the round trip reads as one detour.
pub fn derive_direction(steps: &StepSequence, previous: usize, current: usize) -> Direction {
    let amount_index = steps.amount_index();
    let confirm_index = steps.confirm_index();

    if previous == confirm_index && current == amount_index {
        return Direction::Forward;
    }
    if previous == amount_index && current == confirm_index {
        return Direction::Backward;
    }

    match previous.cmp(&current) {
        std::cmp::Ordering::Less => Direction::Forward,
        std::cmp::Ordering::Greater => Direction::Backward,
        std::cmp::Ordering::Equal => Direction::None,
    }
}
